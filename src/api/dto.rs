use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardId, Side, Suit};
use crate::engine::GameStatus;

/// Снапшот партии для фронта. Чистая проекция состояния.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    /// Поколение партии (растёт при каждом рестарте).
    pub generation: u64,
    pub deck_size: usize,
    pub discard_size: usize,
    pub top_discard: Option<Card>,
    /// Масть после восьмёрки (если действует).
    pub declared_suit: Option<Suit>,
    pub player_hand: Vec<Card>,
    /// Карты компьютера. Фронт показывает их рубашкой вверх.
    pub computer_hand: Vec<Card>,
    pub computer_hand_size: usize,
    pub turn: Side,
    pub status: GameStatus,
    pub winner: Option<Side>,
    /// Восьмёрка игрока, ждущая выбора масти.
    pub pending_eight: Option<Card>,
    pub last_action: String,
    /// Какие карты игрока сейчас подсвечивать (пусто, если ход не его).
    pub playable_cards: Vec<CardId>,
}

impl GameViewDto {
    pub fn is_players_turn(&self) -> bool {
        self.turn == Side::Player && self.status == GameStatus::InProgress
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}
