use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardId, Suit};

/// Намерение живого игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerIntent {
    /// Положить карту из руки (по её ID).
    PlayCard(CardId),
    /// Назвать масть для отложенной восьмёрки.
    DeclareSuit(Suit),
    /// Взять карту из колоды (или пропустить ход, если колода пуста).
    DrawCard,
}

/// Решение компьютерной политики.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ComputerDecision {
    /// Сыграть эту карту из руки.
    Play(Card),
    /// Подходящих карт нет – нужно брать из колоды.
    MustDraw,
}
