//! Damage calculation and application.

use crate::stats::StatRecord;

/// Damage dealt by `attacker` against `defender`, floored at zero.
pub fn calculate_damage(attacker: &StatRecord, defender: &StatRecord) -> u32 {
    attacker.attack_power.saturating_sub(defender.defense)
}

/// New HP value after taking `damage` (clamped to 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
