//! Boss registry and the ruling-boss pointer.

use std::collections::BTreeMap;

use crate::state::StateError;
use crate::stats::{StatBounds, StatRecord};

/// A named boss. Only its health changes after creation, and only through combat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    pub name: String,
    pub stats: StatRecord,
}

impl Boss {
    pub fn health(&self) -> u32 {
        self.stats.health
    }
}

/// All bosses keyed by name, plus the single ruling designation.
///
/// Bosses are never removed. The ruling pointer is unset until the first
/// appointment and always names an existing boss afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossRegistry {
    bosses: BTreeMap<String, Boss>,
    ruling: Option<String>,
}

impl BossRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new boss. No boss is made ruler as a side effect.
    ///
    /// The stored record always carries `is_boss = true`.
    pub fn create_boss(
        &mut self,
        name: impl Into<String>,
        stats: StatRecord,
        bounds: &StatBounds,
    ) -> Result<&Boss, StateError> {
        let name = name.into();
        if self.bosses.contains_key(&name) {
            return Err(StateError::DuplicateName { name });
        }
        stats.validate_within(bounds)?;

        let boss = Boss {
            name: name.clone(),
            stats: StatRecord {
                is_boss: true,
                ..stats
            },
        };
        Ok(self.bosses.entry(name).or_insert(boss))
    }

    /// Points the ruling designation at `name`, returning the previous ruler.
    ///
    /// Re-appointing the current ruler is a no-op beyond the reassignment.
    pub fn appoint_ruling_boss(&mut self, name: &str) -> Result<Option<String>, StateError> {
        if !self.bosses.contains_key(name) {
            return Err(StateError::UnknownBoss {
                name: name.to_owned(),
            });
        }
        Ok(self.ruling.replace(name.to_owned()))
    }

    /// True iff `name` is the current ruler. Never fails.
    pub fn is_ruler(&self, name: &str) -> bool {
        self.ruling.as_deref() == Some(name)
    }

    pub fn ruling_name(&self) -> Option<&str> {
        self.ruling.as_deref()
    }

    pub fn ruling_boss(&self) -> Result<&Boss, StateError> {
        self.ruling
            .as_ref()
            .and_then(|name| self.bosses.get(name))
            .ok_or(StateError::NoRulingBoss)
    }

    pub(crate) fn ruling_boss_mut(&mut self) -> Result<&mut Boss, StateError> {
        match self.ruling.as_ref() {
            Some(name) => self.bosses.get_mut(name).ok_or(StateError::NoRulingBoss),
            None => Err(StateError::NoRulingBoss),
        }
    }

    /// Current health of the ruling boss.
    pub fn current_boss_health(&self) -> Result<u32, StateError> {
        self.ruling_boss().map(Boss::health)
    }

    pub fn get(&self, name: &str) -> Option<&Boss> {
        self.bosses.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bosses.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }

    /// Bosses in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Boss> {
        self.bosses.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{StatError, StatField};

    fn bounds() -> StatBounds {
        StatBounds {
            health: 100_000,
            attack_power: 1000,
            defense: 1000,
        }
    }

    #[test]
    fn create_boss_forces_boss_flag() {
        let mut registry = BossRegistry::new();
        let boss = registry
            .create_boss("Diablo3", StatRecord::character(10_000, 200, 10), &bounds())
            .unwrap();
        assert!(boss.stats.is_boss);
        assert_eq!(boss.health(), 10_000);
        assert_eq!(registry.ruling_name(), None);
    }

    #[test]
    fn duplicate_name_is_rejected_and_registry_unchanged() {
        let mut registry = BossRegistry::new();
        registry
            .create_boss("X", StatRecord::boss(100, 10, 10), &bounds())
            .unwrap();
        let before = registry.clone();

        let err = registry
            .create_boss("X", StatRecord::boss(999, 1, 1), &bounds())
            .unwrap_err();

        assert_eq!(err, StateError::DuplicateName { name: "X".into() });
        assert_eq!(registry, before);
        assert_eq!(registry.get("X").unwrap().health(), 100);
    }

    #[test]
    fn out_of_bounds_leaves_registry_empty() {
        let mut registry = BossRegistry::new();
        let err = registry
            .create_boss("Huge", StatRecord::boss(100, 1001, 10), &bounds())
            .unwrap_err();

        assert_eq!(
            err,
            StateError::OutOfBounds(StatError::OutOfBounds {
                field: StatField::AttackPower,
                value: 1001,
                max: 1000,
            })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn single_ruling_boss() {
        let mut registry = BossRegistry::new();
        registry
            .create_boss("A", StatRecord::boss(100, 10, 10), &bounds())
            .unwrap();
        registry
            .create_boss("B", StatRecord::boss(200, 10, 10), &bounds())
            .unwrap();

        assert_eq!(registry.appoint_ruling_boss("A"), Ok(None));
        assert_eq!(registry.appoint_ruling_boss("B"), Ok(Some("A".into())));

        assert!(!registry.is_ruler("A"));
        assert!(registry.is_ruler("B"));
        assert_eq!(registry.current_boss_health(), Ok(200));
    }

    #[test]
    fn reappointing_same_boss_is_idempotent() {
        let mut registry = BossRegistry::new();
        registry
            .create_boss("A", StatRecord::boss(100, 10, 10), &bounds())
            .unwrap();
        registry.appoint_ruling_boss("A").unwrap();
        assert_eq!(registry.appoint_ruling_boss("A"), Ok(Some("A".into())));
        assert!(registry.is_ruler("A"));
    }

    #[test]
    fn appointing_unknown_boss_keeps_previous_ruler() {
        let mut registry = BossRegistry::new();
        registry
            .create_boss("A", StatRecord::boss(100, 10, 10), &bounds())
            .unwrap();
        registry.appoint_ruling_boss("A").unwrap();

        assert_eq!(
            registry.appoint_ruling_boss("Ghost"),
            Err(StateError::UnknownBoss {
                name: "Ghost".into()
            })
        );
        assert!(registry.is_ruler("A"));
    }

    #[test]
    fn queries_without_ruler() {
        let registry = BossRegistry::new();
        assert!(!registry.is_ruler("A"));
        assert_eq!(registry.current_boss_health(), Err(StateError::NoRulingBoss));
    }
}
