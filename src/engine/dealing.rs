use crate::domain::{Card, Deck, Hand, Table, HAND_SIZE};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Перемешать произвольную последовательность (Fisher–Yates через `RandomSource`).
pub fn shuffle<T, R: RandomSource>(items: Vec<T>, rng: &mut R) -> Vec<T> {
    let mut items = items;
    rng.shuffle(&mut items);
    items
}

/// Новая перемешанная колода из 52 карт, каждая ровно один раз.
pub fn create_deck<R: RandomSource>(rng: &mut R) -> Deck {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    deck
}

/// Раздача новой партии:
/// - 8 карт игроку, потом 8 компьютеру, сверху колоды;
/// - первая сверху не-восьмёрка из остатка уходит в сброс;
/// - остальное – колода добора.
pub fn deal_new_table<R: RandomSource>(rng: &mut R) -> Result<Table, EngineError> {
    let deck = create_deck(rng);
    deal_from_deck(deck)
}

/// Раздача из уже готовой (перемешанной) колоды.
pub fn deal_from_deck(mut deck: Deck) -> Result<Table, EngineError> {
    let player_hand = Hand::from_cards(deck.draw_n(HAND_SIZE));
    let computer_hand = Hand::from_cards(deck.draw_n(HAND_SIZE));

    if player_hand.len() != HAND_SIZE || computer_hand.len() != HAND_SIZE {
        return Err(EngineError::Internal("not enough cards to deal"));
    }

    // В остатке из 36 карт максимум 4 восьмёрки, так что поиск всегда успешен.
    let starter: Card = deck
        .take_from_top_where(|c| !c.is_wild())
        .ok_or(EngineError::Internal("no non-wild card left for the starting discard"))?;

    Ok(Table::new(deck, vec![starter], player_hand, computer_hand))
}
