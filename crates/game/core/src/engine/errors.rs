//! Error types surfaced by the game controller.

use crate::error::{ErrorSeverity, GameError};
use crate::state::StateError;
use crate::stats::StatError;

/// Flat classification of every way a call can be rejected.
///
/// Layered errors collapse into exactly one kind, so callers can branch on
/// the failure without matching nested enums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    AlreadyInitialized,
    NotInitialized,
    OutOfBounds,
    DuplicateName,
    UnknownBoss,
    NoRulingBoss,
    DuplicateCharacter,
    UnknownCharacter,
}

/// Errors surfaced while executing a call through the game engine.
///
/// A returned error always means the state was left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("game is already initialized")]
    AlreadyInitialized,

    #[error("game is not initialized")]
    NotInitialized,

    #[error("max value must be at least 1")]
    InvalidMaxValue,

    #[error(transparent)]
    State(#[from] StateError),
}

impl From<StatError> for ExecuteError {
    fn from(error: StatError) -> Self {
        Self::State(StateError::OutOfBounds(error))
    }
}

impl ExecuteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            Self::NotInitialized => ErrorKind::NotInitialized,
            Self::InvalidMaxValue => ErrorKind::OutOfBounds,
            Self::State(error) => match error {
                StateError::OutOfBounds(_) => ErrorKind::OutOfBounds,
                StateError::DuplicateName { .. } => ErrorKind::DuplicateName,
                StateError::UnknownBoss { .. } => ErrorKind::UnknownBoss,
                StateError::NoRulingBoss => ErrorKind::NoRulingBoss,
                StateError::DuplicateCharacter { .. } => ErrorKind::DuplicateCharacter,
                StateError::UnknownCharacter { .. } => ErrorKind::UnknownCharacter,
            },
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyInitialized | Self::InvalidMaxValue => ErrorSeverity::Validation,
            Self::NotInitialized => ErrorSeverity::Recoverable,
            Self::State(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "ENGINE_ALREADY_INITIALIZED",
            Self::NotInitialized => "ENGINE_NOT_INITIALIZED",
            Self::InvalidMaxValue => "ENGINE_INVALID_MAX_VALUE",
            Self::State(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActorId;
    use crate::stats::StatField;

    #[test]
    fn ordering_failures_are_recoverable() {
        let recoverable = [
            ExecuteError::NotInitialized,
            StateError::NoRulingBoss.into(),
            StateError::UnknownCharacter {
                actor: ActorId::from("alice"),
            }
            .into(),
        ];
        for error in recoverable {
            assert!(error.severity().is_recoverable(), "{error}");
        }
    }

    #[test]
    fn bad_input_is_a_validation_failure() {
        let rejected = [
            ExecuteError::AlreadyInitialized,
            ExecuteError::InvalidMaxValue,
            StatError::OutOfBounds {
                field: StatField::Defense,
                value: 2000,
                max: 1000,
            }
            .into(),
            StateError::DuplicateName { name: "A".into() }.into(),
        ];
        for error in rejected {
            assert_eq!(error.severity(), ErrorSeverity::Validation, "{error}");
            assert!(!error.severity().is_recoverable());
        }
    }

    #[test]
    fn kind_flattens_nested_errors() {
        let error: ExecuteError = StatError::OutOfBounds {
            field: StatField::Health,
            value: 5,
            max: 1,
        }
        .into();
        assert_eq!(error.kind(), ErrorKind::OutOfBounds);
        assert_eq!(error.error_code(), "STATE_OUT_OF_BOUNDS");
    }
}
