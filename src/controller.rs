// src/controller.rs

use tracing::{debug, info, warn};

use crate::api::{answer_query, build_game_view, ApiError, Command, GameViewDto, Query, QueryResponse};
use crate::domain::{CardId, Side, Suit};
use crate::engine::{self, EngineError, GameEngine, GameStatus, PlayerIntent, RandomSource};

/// Разрешение на один ход компьютера.
///
/// Выдаётся, когда партия ждёт компьютер, и помнит поколение партии:
/// после рестарта старый билет уже ничего не сделает.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerTurnTicket {
    pub generation: u64,
}

/// Контроллер одной партии:
/// - единственный владелец `GameEngine` (все изменения идут через него);
/// - хранит RNG для новых раздач;
/// - считает поколения партий (рестарт = новое поколение).
pub struct GameController<R: RandomSource> {
    rng: R,
    engine: GameEngine,
    generation: u64,
}

impl<R: RandomSource> GameController<R> {
    /// Сразу раздаёт первую партию.
    pub fn new(mut rng: R) -> Result<Self, ApiError> {
        let engine = engine::start_game(&mut rng)?;
        info!(generation = 0, top = ?engine.top_discard().map(|c| c.short()), "game started");

        Ok(Self {
            rng,
            engine,
            generation: 0,
        })
    }

    /// Контроллер поверх уже готовой партии (поколение 0).
    pub fn from_engine(rng: R, engine: GameEngine) -> Self {
        Self {
            rng,
            engine,
            generation: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Текущий снапшот партии.
    pub fn snapshot(&self) -> GameViewDto {
        build_game_view(&self.engine, self.generation)
    }

    pub fn query(&self, query: &Query) -> QueryResponse {
        answer_query(query, &self.engine, self.generation)
    }

    /// Выполнить команду игрока и вернуть новый снапшот.
    pub fn execute(&mut self, command: Command) -> Result<GameViewDto, ApiError> {
        let intent = match command.as_intent() {
            Some(intent) => intent,
            None => return self.restart(),
        };

        if let PlayerIntent::PlayCard(card_id) = &intent {
            self.ensure_card_id(card_id)?;
        }

        match engine::apply_intent(&mut self.engine, &intent) {
            Ok(status) => {
                debug!(
                    generation = self.generation,
                    ?intent,
                    ?status,
                    last_action = %self.engine.last_action,
                    "intent applied"
                );
                Ok(self.snapshot())
            }
            Err(err) => {
                if err.is_rejection() {
                    debug!(generation = self.generation, ?intent, %err, "intent rejected");
                } else {
                    self.halt(&err);
                }
                Err(err.into())
            }
        }
    }

    pub fn play_card(&mut self, card_id: impl Into<CardId>) -> Result<GameViewDto, ApiError> {
        self.execute(Command::play(card_id))
    }

    pub fn declare_suit(&mut self, suit: Suit) -> Result<GameViewDto, ApiError> {
        self.execute(Command::declare(suit))
    }

    pub fn draw_card(&mut self) -> Result<GameViewDto, ApiError> {
        self.execute(Command::DrawCard)
    }

    /// Новая партия из любого состояния. Старые билеты компьютера протухают.
    pub fn restart(&mut self) -> Result<GameViewDto, ApiError> {
        let engine = engine::start_game(&mut self.rng)?;
        self.engine = engine;
        self.generation += 1;

        info!(
            generation = self.generation,
            top = ?self.engine.top_discard().map(|c| c.short()),
            "game restarted"
        );
        Ok(self.snapshot())
    }

    /// Билет на ход компьютера, если партия сейчас его ждёт.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurnTicket> {
        if self.engine.can_act(Side::Computer) {
            Some(ComputerTurnTicket {
                generation: self.generation,
            })
        } else {
            None
        }
    }

    /// Сделать ход компьютера по билету.
    ///
    /// Протухший билет (другое поколение или ход уже не компьютера)
    /// молча отбрасывается: `Ok(None)`.
    pub fn run_computer_turn(
        &mut self,
        ticket: ComputerTurnTicket,
    ) -> Result<Option<GameViewDto>, ApiError> {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "stale computer turn discarded"
            );
            return Ok(None);
        }
        if !self.engine.can_act(Side::Computer) {
            debug!(
                generation = self.generation,
                turn = %self.engine.turn,
                status = %self.engine.status,
                "computer turn no longer due"
            );
            return Ok(None);
        }

        let status = match engine::play_computer_turn(&mut self.engine) {
            Ok(status) => status,
            Err(err) => {
                if !err.is_rejection() {
                    self.halt(&err);
                }
                return Err(err.into());
            }
        };
        debug!(
            generation = self.generation,
            ?status,
            last_action = %self.engine.last_action,
            "computer moved"
        );
        Ok(Some(self.snapshot()))
    }

    /// Прогнать ходы компьютера синхронно, пока не придёт очередь игрока
    /// (или партия не закончится).
    pub fn play_until_human_turn(&mut self) -> Result<GameViewDto, ApiError> {
        while let Some(ticket) = self.pending_computer_turn() {
            self.run_computer_turn(ticket)?;
        }
        Ok(self.snapshot())
    }

    /// Внутренняя ошибка движка: партия дальше не идёт, пока её не перезапустят.
    /// Новых билетов на ход компьютера после этого не выдаётся.
    fn halt(&mut self, err: &EngineError) {
        warn!(generation = self.generation, %err, "engine failure, game halted");
        self.engine.status = GameStatus::Finished;
        self.engine.winner = None;
    }

    /// Битый ID карты – это ошибка запроса, а не игровой отказ.
    fn ensure_card_id(&mut self, card_id: &CardId) -> Result<(), ApiError> {
        if let Err(reason) = card_id.parse() {
            self.engine.last_action = format!("{card_id} is not a card.");
            warn!(generation = self.generation, %card_id, %reason, "malformed card id");
            return Err(ApiError::BadRequest(reason));
        }
        Ok(())
    }
}
