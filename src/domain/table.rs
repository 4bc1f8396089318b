use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::player::Side;

/// Сколько карт получает каждая сторона при раздаче.
pub const HAND_SIZE: usize = 8;

/// Все карты партии: колода добора, сброс и две руки.
///
/// Инвариант: вместе это ровно 52 уникальные карты на всё время партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    /// Колода добора (верх – конец вектора).
    pub deck: Deck,
    /// Сброс; последняя карта – верхняя, по ней проверяется следующий ход.
    pub discard_pile: Vec<Card>,
    pub player_hand: Hand,
    pub computer_hand: Hand,
}

impl Table {
    pub fn new(deck: Deck, discard_pile: Vec<Card>, player_hand: Hand, computer_hand: Hand) -> Self {
        Self {
            deck,
            discard_pile,
            player_hand,
            computer_hand,
        }
    }

    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Computer => &self.computer_hand,
        }
    }

    pub fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Computer => &mut self.computer_hand,
        }
    }

    /// Вытянуть верхнюю карту колоды в руку стороны.
    pub fn draw_into(&mut self, side: Side) -> Option<Card> {
        let card = self.deck.draw_one()?;
        self.hand_mut(side).push(card);
        Some(card)
    }

    /// Переложить карту из руки в сброс. `false`, если карты в руке нет.
    pub fn discard_from(&mut self, side: Side, card: Card) -> bool {
        if !self.hand_mut(side).remove(&card) {
            return false;
        }
        self.discard_pile.push(card);
        true
    }

    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.discard_pile.len() + self.player_hand.len() + self.computer_hand.len()
    }

    /// Все карты партии (для проверки инварианта сохранения).
    pub fn all_cards(&self) -> Vec<Card> {
        let mut all = Vec::with_capacity(self.total_cards());
        all.extend_from_slice(&self.deck.cards);
        all.extend_from_slice(&self.discard_pile);
        all.extend_from_slice(self.player_hand.cards());
        all.extend_from_slice(self.computer_hand.cards());
        all
    }
}
