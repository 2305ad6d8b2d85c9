//! Cloneable façades for issuing calls to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async queries.
//! Mutating calls go through a [`CallerHandle`], which binds the caller
//! identity once so individual calls never carry it as an argument.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{
    Action, ActionResult, ActorId, AttackOutcome, CallerContext, Character, GameConfig,
    GameState, StatRecord,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Binds a caller identity, like a signer connecting to a contract.
    pub fn connect(&self, actor: impl Into<ActorId>) -> CallerHandle {
        CallerHandle {
            handle: self.clone(),
            caller: CallerContext::new(actor),
        }
    }

    /// Submits an action on behalf of `caller` and waits for it to be applied.
    ///
    /// Calls are applied one at a time in the order the worker receives them.
    pub async fn execute(&self, caller: CallerContext, action: Action) -> Result<ActionResult> {
        self.request(|reply| Command::Execute {
            caller,
            action,
            reply,
        })
        .await?
    }

    /// True iff `name` is the ruling boss.
    pub async fn is_ruler(&self, name: impl Into<String>) -> Result<bool> {
        let name = name.into();
        self.request(|reply| Command::IsRuler { name, reply }).await?
    }

    /// Current health of the ruling boss.
    pub async fn boss_health(&self) -> Result<u32> {
        self.request(|reply| Command::BossHealth { reply }).await?
    }

    pub async fn character_of(&self, actor: impl Into<ActorId>) -> Result<Character> {
        let actor = actor.into();
        self.request(|reply| Command::CharacterOf { actor, reply })
            .await?
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut combat = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = combat.recv().await {
    ///     // Handle attacks on the ruling boss
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}

/// A [`RuntimeHandle`] bound to one caller identity.
#[derive(Clone)]
pub struct CallerHandle {
    handle: RuntimeHandle,
    caller: CallerContext,
}

impl CallerHandle {
    pub fn actor(&self) -> &ActorId {
        self.caller.actor()
    }

    pub async fn execute(&self, action: Action) -> Result<ActionResult> {
        self.handle.execute(self.caller.clone(), action).await
    }

    pub async fn initialize(&self, max_value: u32) -> Result<()> {
        self.initialize_with(GameConfig::with_max_value(max_value))
            .await
    }

    pub async fn initialize_with(&self, config: GameConfig) -> Result<()> {
        self.execute(Action::Initialize { config }).await.map(|_| ())
    }

    /// Returns the stored record (always flagged as a boss).
    pub async fn create_boss(
        &self,
        name: impl Into<String>,
        stats: StatRecord,
    ) -> Result<StatRecord> {
        match self.execute(Action::create_boss(name, stats)).await? {
            ActionResult::BossCreated { stats, .. } => Ok(stats),
            other => unreachable!("create_boss produced {other:?}"),
        }
    }

    /// Returns the previously ruling boss, if any.
    pub async fn appoint_ruling_boss(&self, name: impl Into<String>) -> Result<Option<String>> {
        match self.execute(Action::appoint_ruling_boss(name)).await? {
            ActionResult::RulingBossAppointed { previous, .. } => Ok(previous),
            other => unreachable!("appoint_ruling_boss produced {other:?}"),
        }
    }

    /// Creates this caller's character and returns its stats.
    pub async fn generate_character(&self) -> Result<StatRecord> {
        match self.execute(Action::GenerateCharacter).await? {
            ActionResult::CharacterGenerated { stats, .. } => Ok(stats),
            other => unreachable!("generate_character produced {other:?}"),
        }
    }

    /// Attacks the ruling boss with this caller's character.
    pub async fn attack(&self) -> Result<AttackOutcome> {
        match self.execute(Action::Attack).await? {
            ActionResult::BossAttacked(outcome) => Ok(outcome),
            other => unreachable!("attack produced {other:?}"),
        }
    }

    /// This caller's character.
    pub async fn character(&self) -> Result<Character> {
        self.handle.character_of(self.caller.actor().clone()).await
    }
}
