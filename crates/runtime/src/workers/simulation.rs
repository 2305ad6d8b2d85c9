//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! This is the serializing executor: commands arrive on one mpsc queue and
//! are applied strictly one at a time, each against the state left by the
//! previous one. Nothing is cached between commands.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use game_core::{
    Action, ActionResult, ActorId, CallerContext, Character, GameEngine, GameError, GameQuery,
    GameState,
};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::events::{CombatEvent, Event, EventBus, GameStateEvent};
use crate::repository::StateRepository;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Apply a mutating action on behalf of a caller.
    Execute {
        caller: CallerContext,
        action: Action,
        reply: oneshot::Sender<Result<ActionResult>>,
    },
    IsRuler {
        name: String,
        reply: oneshot::Sender<Result<bool>>,
    },
    BossHealth {
        reply: oneshot::Sender<Result<u32>>,
    },
    CharacterOf {
        actor: ActorId,
        reply: oneshot::Sender<Result<Character>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes game commands.
pub struct SimulationWorker {
    state: GameState,
    command_rx: mpsc::Receiver<Command>,
    shutdown_rx: oneshot::Receiver<()>,
    event_bus: EventBus,
    repository: Option<Arc<dyn StateRepository>>,
    snapshot_retention: Option<usize>,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        command_rx: mpsc::Receiver<Command>,
        shutdown_rx: oneshot::Receiver<()>,
        event_bus: EventBus,
        repository: Option<Arc<dyn StateRepository>>,
        snapshot_retention: Option<usize>,
    ) -> Self {
        info!(
            nonce = state.nonce,
            initialized = state.is_initialized(),
            bosses = state.bosses.len(),
            characters = state.characters.len(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            command_rx,
            shutdown_rx,
            event_bus,
            repository,
            snapshot_retention,
        }
    }

    /// Main worker loop.
    ///
    /// Ends on the shutdown signal or once every handle has been dropped.
    /// A command already dequeued always runs to completion first.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                biased;
                _ = &mut self.shutdown_rx => break,
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        info!(nonce = self.state.nonce, "SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute {
                caller,
                action,
                reply,
            } => {
                let result = self.handle_execute(&caller, action);
                if reply.send(result).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            Command::IsRuler { name, reply } => {
                let result = self.query().is_ruler(&name).map_err(RuntimeError::from);
                if reply.send(result).is_err() {
                    debug!("IsRuler reply channel closed (caller dropped)");
                }
            }
            Command::BossHealth { reply } => {
                let result = self
                    .query()
                    .current_boss_health()
                    .map_err(RuntimeError::from);
                if reply.send(result).is_err() {
                    debug!("BossHealth reply channel closed (caller dropped)");
                }
            }
            Command::CharacterOf { actor, reply } => {
                let result = self
                    .query()
                    .character_of(&actor)
                    .cloned()
                    .map_err(RuntimeError::from);
                if reply.send(result).is_err() {
                    debug!("CharacterOf reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn query(&self) -> GameQuery<'_> {
        GameQuery::new(&self.state)
    }

    /// Applies one action as an all-or-nothing transaction.
    ///
    /// The action runs against a working copy. The copy is persisted first
    /// (when a repository is configured) and only then replaces the live
    /// state, so neither a rejected action nor a failed save leaves a trace.
    fn handle_execute(&mut self, caller: &CallerContext, action: Action) -> Result<ActionResult> {
        let mut working = self.state.clone();

        let result = match GameEngine::new(&mut working).execute(caller, &action) {
            Ok(result) => result,
            Err(error) => {
                // Ordering failures (no ruler yet, no character yet) are routine.
                if error.severity().is_recoverable() {
                    info!(
                        caller = %caller.actor(),
                        action = action.label(),
                        code = error.error_code(),
                        "Action rejected: {}",
                        error
                    );
                } else {
                    warn!(
                        caller = %caller.actor(),
                        action = action.label(),
                        code = error.error_code(),
                        severity = error.severity().as_str(),
                        "Action rejected: {}",
                        error
                    );
                }
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::ActionFailed {
                        caller: caller.actor().clone(),
                        kind: error.kind(),
                        error: error.to_string(),
                        action,
                    }));
                return Err(error.into());
            }
        };

        if let Some(repository) = &self.repository {
            repository.save(working.nonce, &working).inspect_err(|error| {
                warn!(
                    nonce = working.nonce,
                    "Failed to persist state, rolling back: {}", error
                );
            })?;

            // The commit is already durable; a failed prune only leaves extra snapshots.
            if let Some(keep) = self.snapshot_retention {
                match repository.prune(keep) {
                    Ok(0) => {}
                    Ok(pruned) => debug!(pruned, keep, "Pruned old snapshots"),
                    Err(error) => warn!(keep, "Failed to prune snapshots: {}", error),
                }
            }
        }

        self.state = working;
        let nonce = self.state.nonce;
        info!(
            nonce,
            caller = %caller.actor(),
            action = action.label(),
            "Action committed"
        );

        if let ActionResult::BossAttacked(outcome) = &result {
            info!(
                boss = %outcome.boss,
                damage = outcome.damage,
                health = outcome.health_after,
                "Boss attacked"
            );
            self.event_bus
                .publish(Event::Combat(CombatEvent::BossAttacked {
                    nonce,
                    outcome: outcome.clone(),
                }));
        }
        self.event_bus
            .publish(Event::GameState(GameStateEvent::ActionExecuted {
                nonce,
                caller: caller.actor().clone(),
                result: result.clone(),
            }));

        Ok(result)
    }
}
