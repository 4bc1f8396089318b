use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardId};
use crate::engine::GameEngine;

use super::dto::GameViewDto;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полный снапшот партии.
    GetGame,

    /// Только ID карт, которые игрок может сыграть сейчас.
    PlayableCards,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameViewDto),
    PlayableCards(Vec<CardId>),
}

/// Ответить на запрос по текущему движку.
pub fn answer_query(query: &Query, engine: &GameEngine, generation: u64) -> QueryResponse {
    match query {
        Query::GetGame => QueryResponse::Game(build_game_view(engine, generation)),
        Query::PlayableCards => QueryResponse::PlayableCards(playable_ids(engine)),
    }
}

/// Сформировать DTO партии на основе `GameEngine`.
pub fn build_game_view(engine: &GameEngine, generation: u64) -> GameViewDto {
    let table = &engine.table;

    GameViewDto {
        generation,
        deck_size: table.deck.len(),
        discard_size: table.discard_pile.len(),
        top_discard: table.top_discard().copied(),
        declared_suit: engine.declared_suit,
        player_hand: table.player_hand.cards().to_vec(),
        computer_hand: table.computer_hand.cards().to_vec(),
        computer_hand_size: table.computer_hand.len(),
        turn: engine.turn,
        status: engine.status,
        winner: engine.winner,
        pending_eight: engine.pending_eight,
        last_action: engine.last_action.clone(),
        playable_cards: playable_ids(engine),
    }
}

fn playable_ids(engine: &GameEngine) -> Vec<CardId> {
    engine
        .playable_for_player()
        .iter()
        .map(Card::id)
        .collect()
}
