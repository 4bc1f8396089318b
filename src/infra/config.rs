//! Конфигурация движка для встраивания во фронт / headless-режим.
//!
//! Источники:
//!   - `Default` – стандартный темп, системный RNG;
//!   - переменные окружения `EIGHTS_THINK_TIME_MS`, `EIGHTS_SEED`;
//!   - JSON-документ (например, из настроек фронта).
//!
//! Правила игры (размер руки и т.п.) здесь НЕ настраиваются.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infra::rng::EngineRng;
use crate::time_ctrl::ThinkTime;

pub const ENV_THINK_TIME_MS: &str = "EIGHTS_THINK_TIME_MS";
pub const ENV_SEED: &str = "EIGHTS_SEED";

/// Ошибки загрузки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Переменная {name} содержит некорректное значение: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Некорректный JSON конфигурации: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Пауза перед ходом компьютера.
    pub think_time: ThinkTime,
    /// Seed для воспроизводимых раздач. `None` – системный RNG.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Конфиг для тестов: без паузы, с фиксированным seed.
    pub fn headless(seed: u64) -> Self {
        Self {
            think_time: ThinkTime::instant(),
            seed: Some(seed),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Собрать конфиг из произвольного источника "имя → значение".
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_THINK_TIME_MS) {
            let ms = parse_u64(ENV_THINK_TIME_MS, &raw)?;
            config.think_time = ThinkTime::new(ms);
        }

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_u64(ENV_SEED, &raw)?);
        }

        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn rng(&self) -> EngineRng {
        EngineRng::from_seed_opt(self.seed)
    }
}

fn parse_u64(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: raw.to_string(),
    })
}
