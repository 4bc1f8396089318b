//! Движок партии: раздача, правила, политика компьютера, переходы состояний.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `start_game` – перемешать колоду и раздать новую партию
//!   - `apply_intent` – применить намерение живого игрока
//!   - `play_computer_turn` – сделать ход за компьютер

pub mod actions;
pub mod dealing;
pub mod errors;
pub mod game_history;
pub mod game_loop;
pub mod policy;
pub mod validation;

pub use actions::{ComputerDecision, PlayerIntent};
pub use dealing::{create_deck, deal_from_deck, deal_new_table, shuffle};
pub use errors::EngineError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::{
    apply_intent, check_winner, play_computer_turn, start_game, start_game_from_table, GameEngine,
    GameStatus, TurnStatus,
};
pub use policy::{choose_best_suit, select_move};
pub use validation::{can_play_card, playable_cards, target_suit, validate_play};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
