use serde::{Deserialize, Serialize};

use crate::domain::{CardId, Suit};
use crate::engine::PlayerIntent;

/// Команда верхнего уровня от фронта.
///
/// Каждая команда либо меняет состояние и возвращает новый снапшот,
/// либо отклоняется с `ApiError`, не меняя партию (кроме строки журнала).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Сыграть карту из руки игрока.
    PlayCard(PlayCardCommand),

    /// Назвать масть для выложенной восьмёрки.
    DeclareSuit(DeclareSuitCommand),

    /// Взять карту из колоды (при пустой колоде – пропуск хода).
    DrawCard,

    /// Начать партию заново из любого состояния.
    Restart,
}

/// Сыграть карту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayCardCommand {
    /// ID карты вида "7-hearts".
    pub card_id: CardId,
}

/// Объявить масть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeclareSuitCommand {
    pub suit: Suit,
}

impl Command {
    pub fn play(card_id: impl Into<CardId>) -> Self {
        Command::PlayCard(PlayCardCommand {
            card_id: card_id.into(),
        })
    }

    pub fn declare(suit: Suit) -> Self {
        Command::DeclareSuit(DeclareSuitCommand { suit })
    }

    /// Намерение для движка. `None` для `Restart` – это забота контроллера.
    pub fn as_intent(&self) -> Option<PlayerIntent> {
        match self {
            Command::PlayCard(cmd) => Some(PlayerIntent::PlayCard(cmd.card_id.clone())),
            Command::DeclareSuit(cmd) => Some(PlayerIntent::DeclareSuit(cmd.suit)),
            Command::DrawCard => Some(PlayerIntent::DrawCard),
            Command::Restart => None,
        }
    }
}
