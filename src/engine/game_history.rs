use serde::{Deserialize, Serialize};

use crate::domain::{Card, Side, Suit};

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Раздача завершена, открыта стартовая карта сброса.
    GameStarted { starting_card: Card },

    /// Обычная карта ушла в сброс.
    CardPlayed { side: Side, card: Card },

    /// Игрок выбрал восьмёрку, ждём масть.
    SuitChoiceRequested { card: Card },

    /// Восьмёрка сыграна с объявлением масти.
    SuitDeclared { side: Side, card: Card, suit: Suit },

    /// Сторона взяла карту из колоды (какую – не пишем, это закрытая информация).
    CardDrawn { side: Side },

    /// Ход пропущен: ходить нечем, колода пуста.
    TurnSkipped { side: Side },

    /// Партия завершена.
    GameFinished { winner: Side },
}

/// Событие в партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
