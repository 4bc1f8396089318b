use crate::domain::{Card, Suit};
use crate::engine::errors::EngineError;

/// Масть, которой надо соответствовать: объявленная (после восьмёрки)
/// или масть верхней карты сброса.
pub fn target_suit(top: &Card, declared_suit: Option<Suit>) -> Suit {
    declared_suit.unwrap_or(top.suit)
}

/// Можно ли положить карту на текущий стол.
///
/// - восьмёрка – всегда;
/// - иначе совпадение масти с целевой или ранга с верхней картой.
pub fn can_play_card(card: &Card, top: &Card, declared_suit: Option<Suit>) -> bool {
    if card.is_wild() {
        return true;
    }

    card.suit == target_suit(top, declared_suit) || card.rank == top.rank
}

/// То же, что `can_play_card`, но в виде результата для движка.
pub fn validate_play(card: &Card, top: &Card, declared_suit: Option<Suit>) -> Result<(), EngineError> {
    if can_play_card(card, top, declared_suit) {
        Ok(())
    } else {
        Err(EngineError::IllegalCard(*card))
    }
}

/// Карты из руки, которые сейчас можно сыграть (в порядке руки).
pub fn playable_cards(hand: &[Card], top: &Card, declared_suit: Option<Suit>) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|c| can_play_card(c, top, declared_suit))
        .collect()
}
