// src/runtime/session.rs

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::{ApiError, Command, GameViewDto, Query, QueryResponse};
use crate::controller::{ComputerTurnTicket, GameController};
use crate::domain::{CardId, Suit};
use crate::engine::RandomSource;
use crate::infra::EngineConfig;
use crate::time_ctrl::ThinkTime;

const QUEUE_CAPACITY: usize = 64;

/// Сообщения в очередь сессии.
enum SessionMessage {
    Command {
        command: Command,
        reply: oneshot::Sender<Result<GameViewDto, ApiError>>,
    },
    Query {
        query: Query,
        reply: oneshot::Sender<QueryResponse>,
    },
    /// Таймер "размышления" компьютера сработал.
    ComputerTurn(ComputerTurnTicket),
    Shutdown,
}

/// Хэндл живой партии.
///
/// Партией владеет одна фоновая задача: все команды, запросы и ходы
/// компьютера проходят через её очередь строго по одному.
pub struct GameSession {
    tx: mpsc::Sender<SessionMessage>,
    snapshots: watch::Receiver<GameViewDto>,
    task: JoinHandle<()>,
}

impl GameSession {
    /// Раздать первую партию и запустить задачу сессии.
    /// Вызывать изнутри tokio runtime.
    pub fn spawn<R>(rng: R, think_time: ThinkTime) -> Result<Self, ApiError>
    where
        R: RandomSource + Send + 'static,
    {
        Ok(Self::with_controller(GameController::new(rng)?, think_time))
    }

    /// Запустить задачу сессии поверх готового контроллера.
    pub fn with_controller<R>(controller: GameController<R>, think_time: ThinkTime) -> Self
    where
        R: RandomSource + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let (snap_tx, snap_rx) = watch::channel(controller.snapshot());

        let actor = SessionActor {
            controller,
            think_time,
            queue: tx.downgrade(),
            timer: None,
            snapshots: snap_tx,
        };
        info!(delay_ms = think_time.computer_delay_ms, "session started");
        let task = tokio::spawn(actor.run(rx));

        Self {
            tx,
            snapshots: snap_rx,
            task,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ApiError> {
        Self::spawn(config.rng(), config.think_time)
    }

    pub async fn execute(&self, command: Command) -> Result<GameViewDto, ApiError> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionMessage::Command { command, reply }).await?;
        rx.await.map_err(|_| closed())?
    }

    pub async fn play_card(&self, card_id: impl Into<CardId>) -> Result<GameViewDto, ApiError> {
        self.execute(Command::play(card_id)).await
    }

    pub async fn declare_suit(&self, suit: Suit) -> Result<GameViewDto, ApiError> {
        self.execute(Command::declare(suit)).await
    }

    pub async fn draw_card(&self) -> Result<GameViewDto, ApiError> {
        self.execute(Command::DrawCard).await
    }

    pub async fn restart(&self) -> Result<GameViewDto, ApiError> {
        self.execute(Command::Restart).await
    }

    pub async fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        let (reply, rx) = oneshot::channel();
        self.send(SessionMessage::Query { query, reply }).await?;
        rx.await.map_err(|_| closed())
    }

    /// Снапшот через очередь: учитывает всё, что в неё уже попало.
    pub async fn snapshot(&self) -> Result<GameViewDto, ApiError> {
        match self.query(Query::GetGame).await? {
            QueryResponse::Game(view) => Ok(view),
            QueryResponse::PlayableCards(_) => Err(ApiError::Internal(
                "unexpected query response".to_string(),
            )),
        }
    }

    /// Последний опубликованный снапшот, без ожидания очереди.
    pub fn current(&self) -> GameViewDto {
        self.snapshots.borrow().clone()
    }

    /// Подписка на снапшоты: новый публикуется после каждого сообщения.
    pub fn subscribe(&self) -> watch::Receiver<GameViewDto> {
        self.snapshots.clone()
    }

    /// Остановить сессию и дождаться задачи.
    pub async fn shutdown(self) {
        let _ = self.tx.send(SessionMessage::Shutdown).await;
        if let Err(err) = self.task.await {
            warn!(%err, "session task ended abnormally");
        }
    }

    async fn send(&self, msg: SessionMessage) -> Result<(), ApiError> {
        self.tx.send(msg).await.map_err(|_| closed())
    }
}

fn closed() -> ApiError {
    ApiError::Internal("session is closed".to_string())
}

/// Фоновая задача, владеющая контроллером.
struct SessionActor<R: RandomSource> {
    controller: GameController<R>,
    think_time: ThinkTime,
    /// Слабая ссылка на свою же очередь: по ней таймер присылает ход компьютера.
    /// Сама задача очередь не держит, иначе она не закрылась бы никогда.
    queue: mpsc::WeakSender<SessionMessage>,
    timer: Option<JoinHandle<()>>,
    snapshots: watch::Sender<GameViewDto>,
}

impl<R: RandomSource> SessionActor<R> {
    async fn run(mut self, mut rx: mpsc::Receiver<SessionMessage>) {
        // готовая партия может начаться с хода компьютера
        self.schedule_computer_turn();
        while let Some(msg) = rx.recv().await {
            match msg {
                SessionMessage::Command { command, reply } => {
                    if matches!(command, Command::Restart) {
                        self.cancel_timer();
                    }
                    let result = self.controller.execute(command);
                    // Снапшот публикуется до ответа: вызывающий сразу видит его в `current()`.
                    self.publish();
                    let _ = reply.send(result);
                }
                SessionMessage::Query { query, reply } => {
                    let _ = reply.send(self.controller.query(&query));
                }
                SessionMessage::ComputerTurn(ticket) => {
                    if self.controller.pending_computer_turn() == Some(ticket) {
                        self.timer = None;
                    }
                    if let Err(err) = self.controller.run_computer_turn(ticket) {
                        warn!(%err, "computer turn failed");
                    }
                    self.publish();
                }
                SessionMessage::Shutdown => break,
            }
        }

        self.cancel_timer();
        debug!(generation = self.controller.generation(), "session stopped");
    }

    fn publish(&mut self) {
        self.snapshots.send_replace(self.controller.snapshot());
        self.schedule_computer_turn();
    }

    /// Если партия ждёт компьютер, а таймера нет, завести таймер.
    fn schedule_computer_turn(&mut self) {
        // Таймер уже взведён: его сообщение ещё не обработано.
        if self.timer.is_some() {
            return;
        }
        let Some(ticket) = self.controller.pending_computer_turn() else {
            return;
        };

        let delay = self.think_time.delay();
        let queue = self.queue.clone();
        debug!(
            generation = ticket.generation,
            delay_ms = self.think_time.computer_delay_ms,
            "computer turn scheduled"
        );

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(tx) = queue.upgrade() {
                let _ = tx.send(SessionMessage::ComputerTurn(ticket)).await;
            }
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
