// src/time_ctrl/think_time.rs
//! Правила паузы перед ходом компьютера.
//!
//! Здесь только "правила", без состояния и без привязки к конкретной сессии.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Профиль темпа.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThinkProfile {
    /// Обычная игра с фронтом: 1.5 сек на "размышление".
    Standard,
    /// Без паузы: тесты, симуляции.
    Instant,
}

/// Пауза между моментом, когда ход перешёл к компьютеру, и применением его хода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThinkTime {
    pub computer_delay_ms: u64,
}

impl ThinkTime {
    pub const STANDARD_DELAY_MS: u64 = 1_500;

    pub const fn new(computer_delay_ms: u64) -> Self {
        Self { computer_delay_ms }
    }

    pub const fn standard() -> Self {
        Self::new(Self::STANDARD_DELAY_MS)
    }

    pub const fn instant() -> Self {
        Self::new(0)
    }

    pub const fn from_profile(profile: ThinkProfile) -> Self {
        match profile {
            ThinkProfile::Standard => Self::standard(),
            ThinkProfile::Instant => Self::instant(),
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    pub fn is_instant(&self) -> bool {
        self.computer_delay_ms == 0
    }
}

impl Default for ThinkTime {
    fn default() -> Self {
        Self::standard()
    }
}
