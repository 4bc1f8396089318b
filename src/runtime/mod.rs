//! Асинхронная обвязка вокруг контроллера: очередь команд и пауза перед ходом компьютера.

pub mod session;

pub use session::GameSession;
