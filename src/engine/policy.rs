//! Политика компьютерного соперника.
//!
//! Не оптимальная, а просто всегда легальная:
//! сначала обычная карта в масть/ранг, потом восьмёрка, иначе добор.

use crate::domain::{count_suits, Card, Suit};
use crate::engine::actions::ComputerDecision;
use crate::engine::validation::can_play_card;

/// Выбрать ход компьютера.
///
/// Приоритет:
/// 1. первая (в порядке руки) не-восьмёрка, подходящая по масти или рангу;
/// 2. первая восьмёрка;
/// 3. `MustDraw`.
pub fn select_move(hand: &[Card], top: &Card, declared_suit: Option<Suit>) -> ComputerDecision {
    if let Some(card) = hand
        .iter()
        .find(|c| !c.is_wild() && can_play_card(c, top, declared_suit))
    {
        return ComputerDecision::Play(*card);
    }

    match hand.iter().find(|c| c.is_wild()) {
        Some(eight) => ComputerDecision::Play(*eight),
        None => ComputerDecision::MustDraw,
    }
}

/// Масть, которую компьютер объявляет вместе с восьмёркой.
///
/// `hand_after_play` – рука уже без сыгранной восьмёрки.
/// Берём самую частую масть; при равенстве побеждает первая
/// в порядке Hearts, Diamonds, Clubs, Spades. Пустая рука → Hearts.
pub fn choose_best_suit(hand_after_play: &[Card]) -> Suit {
    let counts = count_suits(hand_after_play);

    let mut best = Suit::Hearts;
    for suit in Suit::ALL {
        // строго больше – чтобы при ничьей оставалась более ранняя масть
        if counts[suit.index()] > counts[best.index()] {
            best = suit;
        }
    }
    best
}
