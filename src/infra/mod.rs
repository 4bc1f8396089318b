//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - конфигурация (окружение / JSON).

pub mod config;
pub mod rng;

pub use config::{ConfigError, EngineConfig};
pub use rng::*;
