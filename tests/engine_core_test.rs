// tests/engine_core_test.rs
//
// Ядро движка (engine::dealing + engine::game_loop):
//  - раздача и стартовое состояние;
//  - обычный ход, восьмёрка с объявлением масти, ход компьютера;
//  - добор и пропуск хода при пустой колоде;
//  - победа обеих сторон и "замороженная" партия после неё.

mod common;

use common::{assert_full_unique_deck, c, engine_with, DummyRng};
use eights_engine::domain::{Card, CardId, Deck, Hand, Rank, Side, Suit, HAND_SIZE};
use eights_engine::engine::{
    apply_intent, check_winner, deal_from_deck, play_computer_turn, start_game,
    EngineError, GameEventKind, GameStatus, PlayerIntent, TurnStatus,
};
use eights_engine::infra::DeterministicRng;

fn play(id: &str) -> PlayerIntent {
    PlayerIntent::PlayCard(CardId::new(id))
}

//
// Раздача
//
#[test]
fn start_game_deals_known_hands_with_dummy_rng() {
    let engine = start_game(&mut DummyRng).unwrap();
    let table = &engine.table;

    assert_eq!(
        table.player_hand.cards(),
        &[
            c(Rank::King, Suit::Spades),
            c(Rank::Queen, Suit::Spades),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Ten, Suit::Spades),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Eight, Suit::Spades),
            c(Rank::Seven, Suit::Spades),
            c(Rank::Six, Suit::Spades),
        ]
    );
    assert_eq!(table.computer_hand.len(), HAND_SIZE);
    assert_eq!(table.computer_hand.cards()[0], c(Rank::Five, Suit::Spades));
    assert_eq!(table.discard_pile, vec![c(Rank::Ten, Suit::Clubs)]);
    assert_eq!(table.deck.len(), 35);
    assert_eq!(table.deck.peek(), Some(&c(Rank::Nine, Suit::Clubs)));

    assert_eq!(engine.turn, Side::Player);
    assert_eq!(engine.status, GameStatus::InProgress);
    assert_eq!(engine.declared_suit, None);
    assert_eq!(engine.winner, None);
    assert_eq!(engine.last_action, "Game started! Your turn.");
    assert_eq!(
        engine.history.last(),
        Some(&GameEventKind::GameStarted {
            starting_card: c(Rank::Ten, Suit::Clubs)
        })
    );
    assert_full_unique_deck(&table.all_cards());
}

#[test]
fn starting_discard_is_never_an_eight() {
    let mut rng = DeterministicRng::from_seed(2024);
    for _ in 0..300 {
        let engine = start_game(&mut rng).unwrap();
        let top = engine.top_discard().copied().unwrap();
        assert!(!top.is_wild(), "starting discard was {top:?}");
        assert_eq!(engine.total_cards(), 52);
        assert_eq!(engine.table.player_hand.len(), HAND_SIZE);
        assert_eq!(engine.table.computer_hand.len(), HAND_SIZE);
    }
}

/// Восьмёрки прямо под розданными картами пропускаются и остаются в колоде.
#[test]
fn dealing_skips_eights_on_top_of_the_stock() {
    let all = Deck::standard_52().cards;
    let eights: Vec<Card> = all.iter().copied().filter(|c| c.is_wild()).collect();
    let mut cards: Vec<Card> = all.iter().copied().filter(|c| !c.is_wild()).collect();
    let dealt = cards.split_off(cards.len() - 2 * HAND_SIZE);
    let expected_starter = *cards.last().unwrap();
    cards.extend(eights.iter().copied());
    cards.extend(dealt);

    let table = deal_from_deck(Deck::from_cards(cards)).unwrap();

    assert_eq!(table.discard_pile, vec![expected_starter]);
    assert_eq!(table.deck.len(), 35);
    for eight in &eights {
        assert!(table.deck.cards.contains(eight));
    }
    assert_full_unique_deck(&table.all_cards());
}

#[test]
fn dealing_from_a_short_deck_is_an_internal_error() {
    let short = Deck::from_cards(Deck::standard_52().cards.into_iter().take(10).collect());
    assert!(matches!(deal_from_deck(short), Err(EngineError::Internal(_))));

    // хватает на руки, но в остатке одни восьмёрки
    let mut cards: Vec<Card> = vec![
        c(Rank::Eight, Suit::Hearts),
        c(Rank::Eight, Suit::Clubs),
    ];
    cards.extend(
        Deck::standard_52()
            .cards
            .into_iter()
            .filter(|c| !c.is_wild())
            .take(2 * HAND_SIZE),
    );
    assert!(matches!(
        deal_from_deck(Deck::from_cards(cards)),
        Err(EngineError::Internal(_))
    ));
}

//
// Обычный ход
//
#[test]
fn seven_of_hearts_on_nine_of_hearts_passes_the_turn() {
    let mut engine = engine_with(
        &[c(Rank::Seven, Suit::Hearts), c(Rank::Two, Suit::Clubs)],
        &[c(Rank::Three, Suit::Spades), c(Rank::King, Suit::Diamonds)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[c(Rank::Four, Suit::Diamonds)],
    );

    let status = apply_intent(&mut engine, &play("7-hearts")).unwrap();

    assert_eq!(status, TurnStatus::Ongoing);
    assert_eq!(engine.turn, Side::Computer);
    assert_eq!(engine.top_discard(), Some(&c(Rank::Seven, Suit::Hearts)));
    assert_eq!(engine.table.player_hand.len(), 1);
    assert_eq!(engine.last_action, "You played 7 of hearts. Computer's turn.");
    assert_eq!(
        engine.history.last(),
        Some(&GameEventKind::CardPlayed {
            side: Side::Player,
            card: c(Rank::Seven, Suit::Hearts)
        })
    );
}

//
// Восьмёрка игрока
//
#[test]
fn eight_waits_for_suit_then_declares() {
    let mut engine = engine_with(
        &[c(Rank::Eight, Suit::Clubs), c(Rank::Two, Suit::Diamonds)],
        &[c(Rank::Three, Suit::Spades), c(Rank::King, Suit::Diamonds)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[c(Rank::Four, Suit::Diamonds)],
    );

    let status = apply_intent(&mut engine, &play("8-clubs")).unwrap();
    assert_eq!(status, TurnStatus::AwaitingSuit);
    assert_eq!(engine.status, GameStatus::AwaitingSuitChoice);
    assert_eq!(engine.pending_eight, Some(c(Rank::Eight, Suit::Clubs)));
    // восьмёрка ещё в руке, сброс не изменился
    assert_eq!(engine.table.player_hand.len(), 2);
    assert_eq!(engine.top_discard(), Some(&c(Rank::Nine, Suit::Hearts)));
    assert_eq!(engine.turn, Side::Player);
    assert_eq!(engine.last_action, "Choose a suit for your 8.");
    assert!(engine.playable_for_player().is_empty());

    // пока масть не названа, другие действия запрещены
    assert_eq!(
        apply_intent(&mut engine, &PlayerIntent::DrawCard),
        Err(EngineError::InvalidGameStatus(GameStatus::AwaitingSuitChoice))
    );
    assert_eq!(
        apply_intent(&mut engine, &play("2-diamonds")),
        Err(EngineError::InvalidGameStatus(GameStatus::AwaitingSuitChoice))
    );

    let status = apply_intent(&mut engine, &PlayerIntent::DeclareSuit(Suit::Spades)).unwrap();
    assert_eq!(status, TurnStatus::Ongoing);
    assert_eq!(engine.status, GameStatus::InProgress);
    assert_eq!(engine.pending_eight, None);
    assert_eq!(engine.declared_suit, Some(Suit::Spades));
    assert_eq!(engine.top_discard(), Some(&c(Rank::Eight, Suit::Clubs)));
    assert_eq!(engine.table.player_hand.cards(), &[c(Rank::Two, Suit::Diamonds)]);
    assert_eq!(engine.turn, Side::Computer);
    assert_eq!(
        engine.last_action,
        "You played an 8 and chose spades. Computer's turn."
    );

    // компьютер обязан ходить в пики; обычная карта снимает объявленную масть
    play_computer_turn(&mut engine).unwrap();
    assert_eq!(engine.top_discard(), Some(&c(Rank::Three, Suit::Spades)));
    assert_eq!(engine.declared_suit, None);
    assert_eq!(engine.turn, Side::Player);
    assert_eq!(engine.last_action, "Computer played 3 of spades. Your turn.");
}

#[test]
fn declare_suit_without_pending_eight_is_rejected() {
    let mut engine = engine_with(
        &[c(Rank::Two, Suit::Diamonds)],
        &[c(Rank::Three, Suit::Spades)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[],
    );

    assert_eq!(
        apply_intent(&mut engine, &PlayerIntent::DeclareSuit(Suit::Hearts)),
        Err(EngineError::NoPendingEight)
    );
    assert_eq!(engine.last_action, "There is no 8 waiting for a suit.");
    assert_eq!(engine.declared_suit, None);
}

//
// Ход компьютера
//
#[test]
fn computer_plays_eight_and_names_its_longest_suit() {
    let mut engine = engine_with(
        &[c(Rank::Two, Suit::Diamonds)],
        &[
            c(Rank::Eight, Suit::Diamonds),
            c(Rank::Two, Suit::Spades),
            c(Rank::Five, Suit::Spades),
            c(Rank::Nine, Suit::Diamonds),
        ],
        &[c(Rank::King, Suit::Hearts)],
        &[],
    );
    engine.turn = Side::Computer;

    play_computer_turn(&mut engine).unwrap();

    assert_eq!(engine.top_discard(), Some(&c(Rank::Eight, Suit::Diamonds)));
    assert_eq!(engine.declared_suit, Some(Suit::Spades));
    assert_eq!(engine.turn, Side::Player);
    assert_eq!(engine.table.computer_hand.len(), 3);
    assert_eq!(
        engine.last_action,
        "Computer played an 8 and chose spades. Your turn."
    );
    assert_eq!(
        engine.history.last(),
        Some(&GameEventKind::SuitDeclared {
            side: Side::Computer,
            card: c(Rank::Eight, Suit::Diamonds),
            suit: Suit::Spades
        })
    );

    // игрок с 2♦ на объявленные пики не ходит
    assert!(engine.playable_for_player().is_empty());
}

#[test]
fn computer_draws_and_does_not_play_again() {
    // верхняя карта колоды (9♣) подошла бы, но второй попытки нет
    let mut engine = engine_with(
        &[c(Rank::Two, Suit::Diamonds)],
        &[c(Rank::Two, Suit::Clubs)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[c(Rank::Nine, Suit::Clubs)],
    );
    engine.turn = Side::Computer;

    play_computer_turn(&mut engine).unwrap();
    assert_eq!(engine.table.computer_hand.len(), 2);
    assert!(engine.table.deck.is_empty());
    assert_eq!(engine.top_discard(), Some(&c(Rank::Nine, Suit::Hearts)));
    assert_eq!(engine.turn, Side::Player);
    assert_eq!(engine.last_action, "Computer drew a card. Your turn.");

    // колода пуста: компьютер пасует, рука не меняется
    engine.turn = Side::Computer;
    engine.table.computer_hand = Hand::from_cards(vec![c(Rank::Two, Suit::Clubs)]);
    play_computer_turn(&mut engine).unwrap();
    assert_eq!(engine.table.computer_hand.len(), 1);
    assert_eq!(engine.turn, Side::Player);
    assert_eq!(
        engine.last_action,
        "Computer couldn't play and the deck is empty. Your turn!"
    );
    assert_eq!(
        engine.history.last(),
        Some(&GameEventKind::TurnSkipped {
            side: Side::Computer
        })
    );
}

//
// Добор игрока
//
#[test]
fn player_draw_keeps_turn_until_deck_is_empty() {
    let mut engine = engine_with(
        &[c(Rank::Two, Suit::Clubs)],
        &[c(Rank::Three, Suit::Spades)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[c(Rank::Five, Suit::Diamonds)],
    );

    apply_intent(&mut engine, &PlayerIntent::DrawCard).unwrap();
    assert_eq!(engine.table.player_hand.len(), 2);
    assert_eq!(engine.turn, Side::Player);
    assert_eq!(engine.last_action, "You drew a card.");

    apply_intent(&mut engine, &PlayerIntent::DrawCard).unwrap();
    assert_eq!(engine.table.player_hand.len(), 2, "hand must not change on an empty deck");
    assert_eq!(engine.turn, Side::Computer);
    assert_eq!(engine.status, GameStatus::InProgress);
    assert_eq!(engine.last_action, "Deck empty! Skipping your turn.");
}

//
// Победа
//
#[test]
fn player_wins_with_last_card() {
    let mut engine = engine_with(
        &[c(Rank::Seven, Suit::Hearts)],
        &[c(Rank::Three, Suit::Spades)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[c(Rank::Five, Suit::Diamonds)],
    );

    let status = apply_intent(&mut engine, &play("7-hearts")).unwrap();
    assert_eq!(status, TurnStatus::Finished(Side::Player));
    assert_eq!(engine.status, GameStatus::Finished);
    assert_eq!(engine.winner, Some(Side::Player));
    assert_eq!(engine.turn_status(), TurnStatus::Finished(Side::Player));
    assert_eq!(engine.last_action, "You played 7 of hearts. You win!");
    assert_eq!(
        engine.history.last(),
        Some(&GameEventKind::GameFinished {
            winner: Side::Player
        })
    );

    // после конца партии всё отклоняется
    let finished = Err(EngineError::InvalidGameStatus(GameStatus::Finished));
    assert_eq!(apply_intent(&mut engine, &PlayerIntent::DrawCard), finished);
    assert_eq!(apply_intent(&mut engine, &PlayerIntent::DeclareSuit(Suit::Clubs)), finished);
    assert_eq!(play_computer_turn(&mut engine), finished);
    assert_eq!(engine.table.player_hand.len(), 0);
    assert_eq!(engine.table.deck.len(), 1);
}

#[test]
fn player_wins_with_an_eight() {
    let mut engine = engine_with(
        &[c(Rank::Eight, Suit::Spades)],
        &[c(Rank::Three, Suit::Spades)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[],
    );

    apply_intent(&mut engine, &play("8-spades")).unwrap();
    assert_eq!(engine.winner, None);

    let status = apply_intent(&mut engine, &PlayerIntent::DeclareSuit(Suit::Hearts)).unwrap();
    assert_eq!(status, TurnStatus::Finished(Side::Player));
    assert_eq!(engine.last_action, "You played an 8 and chose hearts. You win!");
}

#[test]
fn computer_wins_with_last_card() {
    let mut engine = engine_with(
        &[c(Rank::Two, Suit::Clubs)],
        &[c(Rank::Three, Suit::Hearts)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[],
    );
    engine.turn = Side::Computer;

    let status = play_computer_turn(&mut engine).unwrap();
    assert_eq!(status, TurnStatus::Finished(Side::Computer));
    assert_eq!(engine.winner, Some(Side::Computer));
    assert_eq!(engine.last_action, "Computer played 3 of hearts. Computer wins!");
}

#[test]
fn check_winner_looks_at_the_player_first() {
    let engine = engine_with(&[], &[], &[c(Rank::Nine, Suit::Hearts)], &[]);
    assert_eq!(check_winner(&engine.table), Some(Side::Player));

    let engine = engine_with(&[c(Rank::Two, Suit::Clubs)], &[], &[c(Rank::Nine, Suit::Hearts)], &[]);
    assert_eq!(check_winner(&engine.table), Some(Side::Computer));

    let engine = engine_with(
        &[c(Rank::Two, Suit::Clubs)],
        &[c(Rank::Two, Suit::Hearts)],
        &[c(Rank::Nine, Suit::Hearts)],
        &[],
    );
    assert_eq!(check_winner(&engine.table), None);
}

//
// Сохранение карт на реальной раздаче
//
#[test]
fn dealt_game_conserves_cards_through_a_few_turns() {
    let mut engine = start_game(&mut DummyRng).unwrap();

    // 10♠ на 10♣ – по рангу
    apply_intent(&mut engine, &play("10-spades")).unwrap();
    assert_eq!(engine.total_cards(), 52);

    // компьютер: первая подходящая карта в руке – 5♠
    play_computer_turn(&mut engine).unwrap();
    assert_eq!(engine.top_discard(), Some(&c(Rank::Five, Suit::Spades)));
    assert_eq!(engine.last_action, "Computer played 5 of spades. Your turn.");
    assert_eq!(engine.total_cards(), 52);

    // у игрока остались пики – все подходят
    assert_eq!(engine.playable_for_player().len(), 7);
    apply_intent(&mut engine, &play("K-spades")).unwrap();
    play_computer_turn(&mut engine).unwrap();
    assert_eq!(engine.top_discard(), Some(&c(Rank::Four, Suit::Spades)));

    assert_full_unique_deck(&engine.table.all_cards());
}
