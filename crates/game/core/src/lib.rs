//! Deterministic boss-battle rules.
//!
//! `game-core` defines the canonical state machine: stat records, the boss
//! registry with its single ruling boss, the one-character-per-actor
//! registry, and attack resolution against shared boss health. All state
//! mutation flows through [`engine::GameEngine`]; executors such as the
//! runtime crate decide ordering and persistence.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod state;
pub mod stats;

pub use action::{Action, ActionResult};
pub use combat::{AttackOutcome, apply_damage, calculate_damage, resolve_attack};
pub use config::GameConfig;
pub use engine::{CallerContext, ErrorKind, ExecuteError, GameEngine, GameQuery};
pub use error::{ErrorSeverity, GameError};
pub use rng::{PcgRng, RngOracle, compute_seed};
#[cfg(feature = "serde")]
pub use state::compute_state_root;
pub use state::{
    ActorId, Boss, BossRegistry, Character, CharacterRegistry, GamePhase, GameState, StateError,
};
pub use stats::{StatBounds, StatError, StatField, StatRecord, roll_character_stats};
