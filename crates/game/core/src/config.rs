use crate::stats::StatBounds;

/// Game configuration fixed at initialization.
///
/// A [`GameConfig`] is installed exactly once by the initialize transition and
/// is immutable for the rest of the game's life.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Ceiling for every character stat and for boss attack power / defense.
    pub max_value: u32,
    /// Boss health may reach `max_value * boss_health_scale`.
    pub boss_health_scale: u32,
    /// Base seed mixed into character generation.
    pub seed: u64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_VALUE: u32 = 1000;
    pub const DEFAULT_BOSS_HEALTH_SCALE: u32 = 100;
    pub const DEFAULT_SEED: u64 = 0;

    pub fn new() -> Self {
        Self {
            max_value: Self::DEFAULT_MAX_VALUE,
            boss_health_scale: Self::DEFAULT_BOSS_HEALTH_SCALE,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_max_value(max_value: u32) -> Self {
        Self {
            max_value,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Bounds applied to boss records.
    pub fn boss_bounds(&self) -> StatBounds {
        StatBounds {
            health: self.max_value.saturating_mul(self.boss_health_scale),
            attack_power: self.max_value,
            defense: self.max_value,
        }
    }

    /// Bounds applied to character records.
    pub fn character_bounds(&self) -> StatBounds {
        StatBounds::uniform(self.max_value)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
