//! Serializing executor for the boss-battle game.
//!
//! `game-core` assumes calls are applied one at a time and that committed
//! state is kept somewhere durable. This crate provides both: a single
//! worker task that owns the state and drains a command queue in order,
//! and repositories that store a snapshot after every committed call.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the handles and errors downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`repository`] stores committed state in memory or on disk
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{CallerHandle, Result, RuntimeError, RuntimeHandle};
pub use events::{CombatEvent, Event, EventBus, GameStateEvent, Topic};
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, StateRepository,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
