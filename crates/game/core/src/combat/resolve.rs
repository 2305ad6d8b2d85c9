use crate::state::{ActorId, BossRegistry, CharacterRegistry, StateError};

use super::damage::{apply_damage, calculate_damage};
use super::result::AttackOutcome;

/// Resolves one attack by `actor` against the ruling boss.
///
/// Requires a ruling boss ([`StateError::NoRulingBoss`]) and a character owned
/// by `actor` ([`StateError::UnknownCharacter`]), checked in that order. The
/// boss health is read from the registry on every call and written back before
/// returning; this is the only place boss health changes after creation.
pub fn resolve_attack(
    bosses: &mut BossRegistry,
    characters: &CharacterRegistry,
    actor: &ActorId,
) -> Result<AttackOutcome, StateError> {
    bosses.ruling_boss()?;
    let character = characters.character_of(actor)?;

    let boss = bosses.ruling_boss_mut()?;
    let damage = calculate_damage(&character.stats, &boss.stats);
    let health_before = boss.stats.health;
    let health_after = apply_damage(health_before, damage);
    boss.stats.health = health_after;

    Ok(AttackOutcome {
        boss: boss.name.clone(),
        attacker: actor.clone(),
        attack_power: character.stats.attack_power,
        defense: boss.stats.defense,
        damage: health_before - health_after,
        health_before,
        health_after,
    })
}
