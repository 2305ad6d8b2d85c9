//! Common error infrastructure for game-core.
//!
//! Domain-specific errors ([`StatError`](crate::stats::StatError),
//! [`StateError`](crate::state::StateError),
//! [`ExecuteError`](crate::engine::ExecuteError)) live next to the code that
//! raises them. This module holds the classification shared by all of them.
//!
//! Every failure aborts the whole operation before any state is touched, so
//! there is no partial-success variant anywhere in the crate.

/// Severity level of an error, used for categorization and logging priority.
///
/// - **Recoverable**: the same call may succeed once other calls have run
///   (e.g. no ruling boss appointed yet)
/// - **Validation**: invalid input, should not be retried unchanged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields, metrics, and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
