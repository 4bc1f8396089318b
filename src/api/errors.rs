use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CardId, Side};
use crate::engine::{EngineError, GameStatus};

/// Ошибки внешнего API (то, что отдаём фронту).
///
/// Все варианты, кроме `Internal`, – штатные отказы: фронт показывает
/// сообщение и даёт повторить действие.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Сейчас ход другой стороны.
    #[error("not your turn ({0})")]
    NotYourTurn(Side),

    /// Команда не может быть выполнена в текущем статусе партии.
    #[error("invalid game status: {0}")]
    InvalidGameStatus(GameStatus),

    /// Карту нельзя положить на текущий стол.
    #[error("illegal card: {0}")]
    IllegalCard(CardId),

    /// Масть объявлена, но восьмёрки в ожидании нет.
    #[error("no pending eight")]
    NoPendingEight,

    /// Такой карты нет в руке.
    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    /// Неправильные входные данные (например, битый ID карты).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Внутренняя ошибка движка.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Штатный отказ (а не поломка).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, ApiError::Internal(_))
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotYourTurn(side) => ApiError::NotYourTurn(side),
            EngineError::InvalidGameStatus(status) => ApiError::InvalidGameStatus(status),
            EngineError::IllegalCard(card) => ApiError::IllegalCard(card.id()),
            EngineError::NoPendingEight => ApiError::NoPendingEight,
            EngineError::UnknownCard(id) => ApiError::UnknownCard(id),
            EngineError::Internal(msg) => ApiError::Internal(msg.to_string()),
        }
    }
}
