//! Authoritative game state representation.
//!
//! [`GameState`] is an explicit value passed into the engine rather than a
//! process global, so callers control initialization order and tests get full
//! isolation. Runtime layers clone or query it but mutate it exclusively
//! through [`GameEngine`](crate::engine::GameEngine).
mod actor;
mod boss;
mod character;
mod error;
#[cfg(feature = "serde")]
mod root;

pub use actor::ActorId;
pub use boss::{Boss, BossRegistry};
pub use character::{Character, CharacterRegistry};
pub use error::StateError;
#[cfg(feature = "serde")]
pub use root::compute_state_root;

use crate::config::GameConfig;

/// Lifecycle of the game: `Uninitialized -> Initialized`, never back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    #[default]
    Uninitialized,
    Initialized(GameConfig),
}

/// Canonical snapshot of the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: GamePhase,
    pub bosses: BossRegistry,
    pub characters: CharacterRegistry,
    /// Number of successful mutating actions applied so far.
    pub nonce: u64,
}

impl GameState {
    /// Fresh, uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.phase, GamePhase::Initialized(_))
    }

    /// Configuration installed by initialize, if any.
    pub fn config(&self) -> Option<&GameConfig> {
        match &self.phase {
            GamePhase::Initialized(config) => Some(config),
            GamePhase::Uninitialized => None,
        }
    }
}
