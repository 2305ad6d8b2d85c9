//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the game.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::info;

use game_core::GameState;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::repository::StateRepository;
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Stored snapshots kept after each commit; `None` keeps every one.
    pub snapshot_retention: Option<usize>,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER: usize = 100;
    pub const DEFAULT_COMMAND_BUFFER: usize = 32;
    pub const DEFAULT_SNAPSHOT_RETENTION: usize = 16;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_EVENT_BUFFER` - Events buffered per topic (default: 100)
    /// - `ARENA_COMMAND_BUFFER` - Queued commands (default: 32)
    /// - `ARENA_SNAPSHOT_RETENTION` - Snapshots kept in the repository (default: 16)
    ///
    /// Unset variables and values that are not positive integers fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self {
            event_buffer_size: read_env("ARENA_EVENT_BUFFER", Self::DEFAULT_EVENT_BUFFER),
            command_buffer_size: read_env("ARENA_COMMAND_BUFFER", Self::DEFAULT_COMMAND_BUFFER),
            snapshot_retention: Some(read_env(
                "ARENA_SNAPSHOT_RETENTION",
                Self::DEFAULT_SNAPSHOT_RETENTION,
            )),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER,
            command_buffer_size: Self::DEFAULT_COMMAND_BUFFER,
            snapshot_retention: Some(Self::DEFAULT_SNAPSHOT_RETENTION),
        }
    }
}

fn read_env(key: &str, default: usize) -> usize {
    parse_positive(std::env::var(key).ok().as_deref()).unwrap_or(default)
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|&value| value > 0)
}

/// Main runtime that owns the game state worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients. Dropping the
/// runtime stops the worker; outstanding handles then fail with
/// [`RuntimeError::CommandChannelClosed`].
pub struct Runtime {
    handle: RuntimeHandle,
    shutdown_tx: oneshot::Sender<()>,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Stop the worker and wait for it to exit.
    ///
    /// A call already taken off the queue finishes first; queued calls that
    /// were not started are dropped and their callers see
    /// [`RuntimeError::ReplyChannelClosed`].
    pub async fn shutdown(self) -> Result<()> {
        // The worker may already be gone if every handle was dropped.
        let _ = self.shutdown_tx.send(());
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    repository: Option<Arc<dyn StateRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    ///
    /// Takes precedence over anything stored in the repository.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Persist every committed state to `repository`.
    pub fn repository(mut self, repository: Arc<dyn StateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Without an explicit initial state the runtime resumes from the
    /// repository's latest snapshot, or starts from an empty, uninitialized
    /// game.
    pub async fn build(self) -> Result<Runtime> {
        let initial_state = match (self.state, &self.repository) {
            (Some(state), _) => state,
            (None, Some(repository)) => match repository.latest()? {
                Some(state) => {
                    info!(nonce = state.nonce, "Resuming from stored state");
                    state
                }
                None => GameState::new(),
            },
            (None, None) => GameState::new(),
        };

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let sim_worker = SimulationWorker::new(
            initial_state,
            command_rx,
            shutdown_rx,
            event_bus,
            self.repository,
            self.config.snapshot_retention,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Ok(Runtime {
            handle,
            shutdown_tx,
            sim_worker_handle,
        })
    }
}
