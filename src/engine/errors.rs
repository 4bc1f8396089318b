use thiserror::Error;

use crate::domain::{Card, CardId, Side};
use crate::engine::game_loop::GameStatus;

/// Ошибки движка.
///
/// Всё, кроме `Internal`, – это отказы на ожидаемые ошибки фронта:
/// состояние партии не меняется, текст ошибки уходит в журнал (`last_action`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("It's not the {0}'s turn!")]
    NotYourTurn(Side),

    #[error("That action isn't allowed while the game is {0}.")]
    InvalidGameStatus(GameStatus),

    #[error("You can't play the {0}!")]
    IllegalCard(Card),

    #[error("There is no 8 waiting for a suit.")]
    NoPendingEight,

    #[error("Card {0} is not in the hand.")]
    UnknownCard(CardId),

    #[error("Internal error: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Отказ из таксономии (а не внутренняя поломка движка).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, EngineError::Internal(_))
    }
}
