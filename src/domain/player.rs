use core::fmt;

use serde::{Deserialize, Serialize};

/// Сторона за столом: человек или компьютер.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Живой игрок (ходит через фронт).
    Player,
    /// Компьютерный соперник.
    Computer,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub const fn is_human(self) -> bool {
        matches!(self, Side::Player)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Computer => f.write_str("computer"),
        }
    }
}
