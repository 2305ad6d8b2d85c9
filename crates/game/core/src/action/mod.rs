//! Mutating operations as data.
//!
//! Every state change is expressed as an [`Action`] so executors can queue,
//! log and replay calls. The caller identity is never part of an action; it
//! travels separately in a [`CallerContext`](crate::engine::CallerContext).

use crate::combat::AttackOutcome;
use crate::config::GameConfig;
use crate::state::ActorId;
use crate::stats::StatRecord;

/// A mutating call against the game.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    /// One-time setup; installs the configuration.
    Initialize { config: GameConfig },
    CreateBoss { name: String, stats: StatRecord },
    AppointRulingBoss { name: String },
    /// Creates the caller's character.
    GenerateCharacter,
    /// The caller's character attacks the ruling boss.
    Attack,
}

impl Action {
    /// Initialize with default configuration and the given stat ceiling.
    pub fn initialize(max_value: u32) -> Self {
        Self::Initialize {
            config: GameConfig::with_max_value(max_value),
        }
    }

    pub fn create_boss(name: impl Into<String>, stats: StatRecord) -> Self {
        Self::CreateBoss {
            name: name.into(),
            stats,
        }
    }

    pub fn appoint_ruling_boss(name: impl Into<String>) -> Self {
        Self::AppointRulingBoss { name: name.into() }
    }

    /// Short snake_case label for logs.
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// Successful outcome of an [`Action`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Initialized {
        config: GameConfig,
    },
    BossCreated {
        name: String,
        stats: StatRecord,
    },
    RulingBossAppointed {
        name: String,
        previous: Option<String>,
    },
    CharacterGenerated {
        actor: ActorId,
        stats: StatRecord,
    },
    BossAttacked(AttackOutcome),
}
