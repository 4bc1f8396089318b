use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене – просто упорядоченный список карт.
/// Верх колоды – конец вектора.
/// Перемешивание делает engine (через RandomSource из infra), НЕ здесь.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub const FULL_SIZE: usize = 52;

    /// Стандартная 52-карточная колода в порядке:
    /// Hearts A..K, Diamonds A..K, Clubs A..K, Spades A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(Self::FULL_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Верхняя карта без снятия.
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху (или сколько осталось).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }

    /// Снять первую сверху карту, удовлетворяющую условию.
    ///
    /// Просмотр ограничен длиной колоды, так что цикл всегда конечен.
    pub fn take_from_top_where(&mut self, pred: impl Fn(&Card) -> bool) -> Option<Card> {
        let idx = self.cards.iter().rposition(|c| pred(c))?;
        Some(self.cards.remove(idx))
    }
}
