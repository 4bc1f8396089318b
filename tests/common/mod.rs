//! Общие помощники для интеграционных тестов.
#![allow(dead_code)]

use eights_engine::domain::{Card, Deck, Hand, Rank, Suit, Table};
use eights_engine::engine::{start_game_from_table, GameEngine, RandomSource};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Логи в тестах: `TEST_LOG` -> `RUST_LOG` -> "warn". Можно звать сколько угодно раз.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// RNG, который ничего не мешает: колода остаётся в стандартном порядке.
///
/// Раздача тогда известна заранее:
/// - игрок: K♠ Q♠ J♠ 10♠ 9♠ 8♠ 7♠ 6♠;
/// - компьютер: 5♠ 4♠ 3♠ 2♠ A♠ K♣ Q♣ J♣;
/// - сброс: 10♣, сверху колоды 9♣.
#[derive(Clone, Debug, Default)]
pub struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

pub fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Стол "руками": колода задаётся снизу вверх (последняя карта – верхняя).
pub fn table_with(player: &[Card], computer: &[Card], discard: &[Card], deck: &[Card]) -> Table {
    Table::new(
        Deck::from_cards(deck.to_vec()),
        discard.to_vec(),
        Hand::from_cards(player.to_vec()),
        Hand::from_cards(computer.to_vec()),
    )
}

/// Партия поверх стола "руками", ход игрока.
pub fn engine_with(player: &[Card], computer: &[Card], discard: &[Card], deck: &[Card]) -> GameEngine {
    start_game_from_table(table_with(player, computer, discard, deck))
        .expect("table has a starting discard")
}

/// Все 52 карты различны и их ровно 52.
pub fn assert_full_unique_deck(cards: &[Card]) {
    assert_eq!(cards.len(), 52, "expected 52 cards, got {}", cards.len());
    let mut seen = std::collections::HashSet::new();
    for card in cards {
        assert!(seen.insert(*card), "duplicate card {card:?}");
    }
}
