use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardId, Suit};

/// Рука одной стороны. Порядок для правил не важен,
/// но сохраняем порядок добавления, чтобы фронт не "прыгал".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Найти карту по её строковому ID.
    ///
    /// ID разбирается так же, как в `CardId::parse` (регистр не важен).
    pub fn find_by_id(&self, id: &CardId) -> Option<Card> {
        id.parse().ok().filter(|card| self.contains(card))
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Убрать карту из руки. `false`, если такой карты нет.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Количество карт каждой масти, индексы как в `Suit::ALL`.
    pub fn suit_counts(&self) -> [usize; 4] {
        count_suits(&self.cards)
    }

    pub fn count_of(&self, suit: Suit) -> usize {
        self.suit_counts()[suit.index()]
    }
}

/// Количество карт каждой масти, индексы как в `Suit::ALL`.
pub fn count_suits(cards: &[Card]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for c in cards {
        counts[c.suit.index()] += 1;
    }
    counts
}
