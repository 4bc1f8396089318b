//! Движок "Crazy Eights" для двух сторон: живой игрок против компьютера.
//!
//! Слои:
//!   - `domain`     – карты, колода, руки, стол;
//!   - `engine`     – раздача, правила, политика компьютера, переходы состояний;
//!   - `controller` – единственный владелец партии, поколения, билеты на ход компьютера;
//!   - `runtime`    – асинхронная сессия (очередь команд + пауза перед ходом компьютера);
//!   - `api`        – команды / запросы / DTO / ошибки для фронта;
//!   - `infra`      – RNG и конфигурация;
//!   - `time_ctrl`  – темп игры.

pub mod api;
pub mod controller;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod runtime;
pub mod time_ctrl;

pub use api::{ApiError, Command, GameViewDto, Query, QueryResponse};
pub use controller::{ComputerTurnTicket, GameController};
pub use engine::{EngineError, GameEngine, GameStatus, RandomSource};
pub use infra::{DeterministicRng, EngineConfig, EngineRng, SystemRng};
pub use runtime::GameSession;
pub use time_ctrl::ThinkTime;
