//! Combat result types.

use crate::state::ActorId;

/// Everything one attack did to the ruling boss.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Name of the ruling boss that was attacked.
    pub boss: String,
    pub attacker: ActorId,
    /// Attacker's attack power at the time of the attack.
    pub attack_power: u32,
    /// Boss defense at the time of the attack.
    pub defense: u32,
    /// Health actually removed; never more than `health_before`.
    pub damage: u32,
    pub health_before: u32,
    pub health_after: u32,
}

impl AttackOutcome {
    /// True when defense absorbed the whole attack or the boss was already at zero.
    pub fn is_absorbed(&self) -> bool {
        self.health_after == self.health_before
    }

    pub fn boss_depleted(&self) -> bool {
        self.health_after == 0
    }
}
