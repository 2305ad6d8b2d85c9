//! Event types for different topics.

use game_core::{Action, ActionResult, ActorId, AttackOutcome, ErrorKind};
use serde::{Deserialize, Serialize};

/// Events related to game state changes (committed and rejected calls).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// A call was committed; `nonce` is the state nonce after the commit.
    ActionExecuted {
        nonce: u64,
        caller: ActorId,
        result: ActionResult,
    },

    /// A call was rejected and left the state untouched.
    ActionFailed {
        caller: ActorId,
        action: Action,
        kind: ErrorKind,
        error: String,
    },
}

/// Events related to fights against the ruling boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CombatEvent {
    BossAttacked { nonce: u64, outcome: AttackOutcome },
}
