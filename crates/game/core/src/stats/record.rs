use crate::error::{ErrorSeverity, GameError};

/// Numeric fields of a [`StatRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatField {
    Health,
    AttackPower,
    Defense,
}

impl StatField {
    pub const ALL: [StatField; 3] = [Self::Health, Self::AttackPower, Self::Defense];
}

/// Fixed-shape bundle of attributes shared by bosses and characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRecord {
    pub health: u32,
    pub attack_power: u32,
    pub defense: u32,
    pub is_boss: bool,
}

impl StatRecord {
    pub const fn new(health: u32, attack_power: u32, defense: u32, is_boss: bool) -> Self {
        Self {
            health,
            attack_power,
            defense,
            is_boss,
        }
    }

    /// Record flagged as a boss.
    pub const fn boss(health: u32, attack_power: u32, defense: u32) -> Self {
        Self::new(health, attack_power, defense, true)
    }

    /// Record flagged as a player character.
    pub const fn character(health: u32, attack_power: u32, defense: u32) -> Self {
        Self::new(health, attack_power, defense, false)
    }

    pub const fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Health => self.health,
            StatField::AttackPower => self.attack_power,
            StatField::Defense => self.defense,
        }
    }

    pub fn set(&mut self, field: StatField, value: u32) {
        match field {
            StatField::Health => self.health = value,
            StatField::AttackPower => self.attack_power = value,
            StatField::Defense => self.defense = value,
        }
    }

    /// Fails with [`StatError::OutOfBounds`] if any numeric field exceeds `max_value`.
    pub fn validate(&self, max_value: u32) -> Result<(), StatError> {
        self.validate_within(&StatBounds::uniform(max_value))
    }

    /// Checks every numeric field against its own ceiling.
    ///
    /// Fields are checked in [`StatField::ALL`] order; the first violation wins.
    pub fn validate_within(&self, bounds: &StatBounds) -> Result<(), StatError> {
        for field in StatField::ALL {
            let value = self.get(field);
            let max = bounds.get(field);
            if value > max {
                return Err(StatError::OutOfBounds { field, value, max });
            }
        }
        Ok(())
    }
}

/// Per-field inclusive ceilings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBounds {
    pub health: u32,
    pub attack_power: u32,
    pub defense: u32,
}

impl StatBounds {
    pub const fn uniform(max_value: u32) -> Self {
        Self {
            health: max_value,
            attack_power: max_value,
            defense: max_value,
        }
    }

    pub const fn get(&self, field: StatField) -> u32 {
        match field {
            StatField::Health => self.health,
            StatField::AttackPower => self.attack_power,
            StatField::Defense => self.defense,
        }
    }
}

/// Stat validation failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatError {
    #[error("{field} {value} exceeds the maximum of {max}")]
    OutOfBounds {
        field: StatField,
        value: u32,
        max: u32,
    },
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "STAT_OUT_OF_BOUNDS",
        }
    }
}
