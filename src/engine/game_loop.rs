use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardId, Side, Suit, Table};
use crate::engine::actions::{ComputerDecision, PlayerIntent};
use crate::engine::dealing::deal_new_table;
use crate::engine::errors::EngineError;
use crate::engine::game_history::{GameEventKind, GameHistory};
use crate::engine::policy::{choose_best_suit, select_move};
use crate::engine::validation::{playable_cards, validate_play};
use crate::engine::RandomSource;

pub const GAME_STARTED_TEXT: &str = "Game started! Your turn.";

/// Статус партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Обычный ход одной из сторон.
    InProgress,
    /// Игрок выложил восьмёрку и должен назвать масть.
    AwaitingSuitChoice,
    /// Кто-то сбросил все карты.
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::AwaitingSuitChoice => f.write_str("awaiting a suit choice"),
            GameStatus::Finished => f.write_str("finished"),
        }
    }
}

/// Статус после применённого хода, для внешнего кода.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    Ongoing,
    AwaitingSuit,
    Finished(Side),
}

/// Полное состояние партии. Единственный владелец – контроллер.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEngine {
    pub table: Table,
    /// Чей сейчас ход.
    pub turn: Side,
    /// Масть, объявленная последней восьмёркой (пока её не перекрыла другая карта).
    pub declared_suit: Option<Suit>,
    pub status: GameStatus,
    pub winner: Option<Side>,
    /// Восьмёрка игрока, ждущая объявления масти (ещё лежит в руке).
    pub pending_eight: Option<Card>,
    /// Человекочитаемая строка о последнем действии (или отказе).
    pub last_action: String,
    /// История партии.
    pub history: GameHistory,
}

impl GameEngine {
    /// Партия в начальном состоянии поверх уже разложенного стола.
    pub fn new(table: Table) -> Self {
        Self {
            table,
            turn: Side::Player,
            declared_suit: None,
            status: GameStatus::InProgress,
            winner: None,
            pending_eight: None,
            last_action: GAME_STARTED_TEXT.to_string(),
            history: GameHistory::new(),
        }
    }

    pub fn top_discard(&self) -> Option<&Card> {
        self.table.top_discard()
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn total_cards(&self) -> usize {
        self.table.total_cards()
    }

    /// Может ли сторона сейчас сделать обычный ход (сыграть или взять карту).
    pub fn can_act(&self, side: Side) -> bool {
        self.status == GameStatus::InProgress && self.turn == side
    }

    /// Какие карты игрока сейчас можно сыграть. Пусто, если ход не его.
    pub fn playable_for_player(&self) -> Vec<Card> {
        if !self.can_act(Side::Player) {
            return Vec::new();
        }
        match self.top_discard() {
            Some(top) => playable_cards(self.table.player_hand.cards(), top, self.declared_suit),
            None => Vec::new(),
        }
    }

    pub fn turn_status(&self) -> TurnStatus {
        match (self.status, self.winner) {
            (GameStatus::Finished, Some(w)) => TurnStatus::Finished(w),
            (GameStatus::AwaitingSuitChoice, _) => TurnStatus::AwaitingSuit,
            _ => TurnStatus::Ongoing,
        }
    }

    fn ensure_can_act(&self, side: Side) -> Result<(), EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::InvalidGameStatus(self.status));
        }
        if self.turn != side {
            return Err(EngineError::NotYourTurn(side));
        }
        Ok(())
    }

    fn current_top(&self) -> Result<Card, EngineError> {
        self.top_discard()
            .copied()
            .ok_or(EngineError::Internal("discard pile is empty"))
    }
}

/// Старт новой партии:
/// - тасует новую колоду;
/// - раздаёт по 8 карт;
/// - открывает стартовую карту сброса (не восьмёрку).
pub fn start_game<R: RandomSource>(rng: &mut R) -> Result<GameEngine, EngineError> {
    let table = deal_new_table(rng)?;
    start_game_from_table(table)
}

/// Старт партии на заранее разложенном столе (реплей, тесты).
pub fn start_game_from_table(table: Table) -> Result<GameEngine, EngineError> {
    let starting_card = *table
        .top_discard()
        .ok_or(EngineError::Internal("discard pile is empty"))?;

    let mut engine = GameEngine::new(table);
    engine.history.push(GameEventKind::GameStarted { starting_card });
    Ok(engine)
}

/// Применить намерение живого игрока.
///
/// При отказе состояние не меняется, кроме `last_action` с текстом ошибки.
pub fn apply_intent(engine: &mut GameEngine, intent: &PlayerIntent) -> Result<TurnStatus, EngineError> {
    let result = match intent {
        PlayerIntent::PlayCard(card_id) => play_card(engine, card_id),
        PlayerIntent::DeclareSuit(suit) => declare_suit(engine, *suit),
        PlayerIntent::DrawCard => draw_card(engine),
    };

    record_rejection(engine, result)
}

/// Ход компьютера: политика выбирает карту или добор.
pub fn play_computer_turn(engine: &mut GameEngine) -> Result<TurnStatus, EngineError> {
    let result = computer_turn(engine);
    record_rejection(engine, result)
}

fn record_rejection(
    engine: &mut GameEngine,
    result: Result<TurnStatus, EngineError>,
) -> Result<TurnStatus, EngineError> {
    if let Err(err) = &result {
        engine.last_action = err.to_string();
    }
    result
}

fn play_card(engine: &mut GameEngine, card_id: &CardId) -> Result<TurnStatus, EngineError> {
    engine.ensure_can_act(Side::Player)?;

    let card = engine
        .table
        .player_hand
        .find_by_id(card_id)
        .ok_or_else(|| EngineError::UnknownCard(card_id.clone()))?;

    let top = engine.current_top()?;
    validate_play(&card, &top, engine.declared_suit)?;

    if card.is_wild() {
        // Восьмёрка остаётся в руке, пока не назовут масть.
        engine.status = GameStatus::AwaitingSuitChoice;
        engine.pending_eight = Some(card);
        engine.last_action = "Choose a suit for your 8.".to_string();
        engine.history.push(GameEventKind::SuitChoiceRequested { card });
        return Ok(TurnStatus::AwaitingSuit);
    }

    if !engine.table.discard_from(Side::Player, card) {
        return Err(EngineError::Internal("card vanished from the player hand"));
    }
    engine.declared_suit = None;
    engine.history.push(GameEventKind::CardPlayed {
        side: Side::Player,
        card,
    });

    Ok(finish_move(engine, Side::Player, format!("You played {card}.")))
}

fn declare_suit(engine: &mut GameEngine, suit: Suit) -> Result<TurnStatus, EngineError> {
    if engine.status == GameStatus::Finished {
        return Err(EngineError::InvalidGameStatus(engine.status));
    }

    let card = match (engine.status, engine.pending_eight) {
        (GameStatus::AwaitingSuitChoice, Some(card)) => card,
        _ => return Err(EngineError::NoPendingEight),
    };

    if !engine.table.discard_from(Side::Player, card) {
        return Err(EngineError::Internal("pending 8 is not in the player hand"));
    }
    engine.pending_eight = None;
    engine.status = GameStatus::InProgress;
    engine.declared_suit = Some(suit);
    engine.history.push(GameEventKind::SuitDeclared {
        side: Side::Player,
        card,
        suit,
    });

    Ok(finish_move(
        engine,
        Side::Player,
        format!("You played an 8 and chose {suit}."),
    ))
}

fn draw_card(engine: &mut GameEngine) -> Result<TurnStatus, EngineError> {
    engine.ensure_can_act(Side::Player)?;

    match engine.table.draw_into(Side::Player) {
        // Добор сам по себе ход не заканчивает.
        Some(_) => {
            engine.last_action = "You drew a card.".to_string();
            engine.history.push(GameEventKind::CardDrawn { side: Side::Player });
        }
        None => {
            engine.turn = Side::Computer;
            engine.last_action = "Deck empty! Skipping your turn.".to_string();
            engine.history.push(GameEventKind::TurnSkipped { side: Side::Player });
        }
    }

    Ok(TurnStatus::Ongoing)
}

fn computer_turn(engine: &mut GameEngine) -> Result<TurnStatus, EngineError> {
    engine.ensure_can_act(Side::Computer)?;

    let top = engine.current_top()?;
    let decision = select_move(engine.table.computer_hand.cards(), &top, engine.declared_suit);

    match decision {
        ComputerDecision::Play(card) => {
            if !engine.table.discard_from(Side::Computer, card) {
                return Err(EngineError::Internal("policy picked a card outside the computer hand"));
            }

            let text = if card.is_wild() {
                let suit = choose_best_suit(engine.table.computer_hand.cards());
                engine.declared_suit = Some(suit);
                engine.history.push(GameEventKind::SuitDeclared {
                    side: Side::Computer,
                    card,
                    suit,
                });
                format!("Computer played an 8 and chose {suit}.")
            } else {
                engine.declared_suit = None;
                engine.history.push(GameEventKind::CardPlayed {
                    side: Side::Computer,
                    card,
                });
                format!("Computer played {card}.")
            };

            Ok(finish_move(engine, Side::Computer, text))
        }

        // После добора второй попытки сыграть нет – ход сразу уходит игроку.
        ComputerDecision::MustDraw => {
            match engine.table.draw_into(Side::Computer) {
                Some(_) => {
                    engine.last_action = "Computer drew a card. Your turn.".to_string();
                    engine.history.push(GameEventKind::CardDrawn {
                        side: Side::Computer,
                    });
                }
                None => {
                    engine.last_action =
                        "Computer couldn't play and the deck is empty. Your turn!".to_string();
                    engine.history.push(GameEventKind::TurnSkipped {
                        side: Side::Computer,
                    });
                }
            }
            engine.turn = Side::Player;
            Ok(TurnStatus::Ongoing)
        }
    }
}

/// Проверка победителя: рука игрока проверяется первой.
pub fn check_winner(table: &Table) -> Option<Side> {
    if table.player_hand.is_empty() {
        Some(Side::Player)
    } else if table.computer_hand.is_empty() {
        Some(Side::Computer)
    } else {
        None
    }
}

/// Закрыть ход, уменьшивший руку: победа или передача хода сопернику.
fn finish_move(engine: &mut GameEngine, actor: Side, text: String) -> TurnStatus {
    if let Some(winner) = check_winner(&engine.table) {
        engine.status = GameStatus::Finished;
        engine.winner = Some(winner);
        engine.history.push(GameEventKind::GameFinished { winner });
        engine.last_action = match winner {
            Side::Player => format!("{text} You win!"),
            Side::Computer => format!("{text} Computer wins!"),
        };
        return TurnStatus::Finished(winner);
    }

    engine.turn = actor.opponent();
    engine.last_action = match actor {
        Side::Player => format!("{text} Computer's turn."),
        Side::Computer => format!("{text} Your turn."),
    };
    TurnStatus::Ongoing
}
