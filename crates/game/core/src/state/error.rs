//! State management errors.
//!
//! Errors raised by the boss registry, the character registry and the battle
//! resolver. Each one is raised before any mutation takes place.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ActorId;
use crate::stats::StatError;

/// Errors that occur while mutating or querying registries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// A stat record exceeds the configured ceilings.
    #[error(transparent)]
    OutOfBounds(#[from] StatError),

    /// A boss with this name already exists.
    #[error("boss '{name}' already exists")]
    DuplicateName { name: String },

    /// No boss with this name exists.
    #[error("boss '{name}' does not exist")]
    UnknownBoss { name: String },

    /// No boss has been appointed ruler yet.
    #[error("no ruling boss has been appointed")]
    NoRulingBoss,

    /// The actor already owns a character.
    #[error("actor '{actor}' already has a character")]
    DuplicateCharacter { actor: ActorId },

    /// The actor has no character.
    #[error("actor '{actor}' has no character")]
    UnknownCharacter { actor: ActorId },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            OutOfBounds(_) | DuplicateName { .. } | DuplicateCharacter { .. } => {
                ErrorSeverity::Validation
            }
            UnknownBoss { .. } => ErrorSeverity::Validation,

            // Another caller may still appoint a ruler or create the character.
            NoRulingBoss | UnknownCharacter { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            OutOfBounds(_) => "STATE_OUT_OF_BOUNDS",
            DuplicateName { .. } => "STATE_DUPLICATE_NAME",
            UnknownBoss { .. } => "STATE_UNKNOWN_BOSS",
            NoRulingBoss => "STATE_NO_RULING_BOSS",
            DuplicateCharacter { .. } => "STATE_DUPLICATE_CHARACTER",
            UnknownCharacter { .. } => "STATE_UNKNOWN_CHARACTER",
        }
    }
}
