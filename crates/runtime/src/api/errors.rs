//! Unified error types surfaced by the runtime API.
//!
//! Wraps game rejections, worker coordination failures and repository
//! failures so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ErrorKind, ExecuteError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The game rejected the call; the state is unchanged.
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    /// Persisting the committed state failed; the call was rolled back.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Game-level rejection kind, if this error is one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Execute(error) => Some(error.kind()),
            _ => None,
        }
    }
}
