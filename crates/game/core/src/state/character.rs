//! Character registry: at most one character per actor.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::state::{ActorId, StateError};
use crate::stats::{StatRecord, roll_character_stats};

/// A player character owned by exactly one actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub owner: ActorId,
    pub stats: StatRecord,
    /// Position in generation order (0 for the first character ever generated).
    pub serial: u64,
}

/// Append-only map from actor identity to character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRegistry {
    characters: BTreeMap<ActorId, Character>,
    generated: u64,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and stores the actor's character.
    ///
    /// A second call for the same actor fails with
    /// [`StateError::DuplicateCharacter`] and leaves the original untouched.
    pub fn generate_character(
        &mut self,
        actor: &ActorId,
        config: &GameConfig,
    ) -> Result<&Character, StateError> {
        if self.characters.contains_key(actor) {
            return Err(StateError::DuplicateCharacter {
                actor: actor.clone(),
            });
        }

        let serial = self.generated;
        let stats = roll_character_stats(config.seed, serial, actor, config.max_value);
        stats.validate_within(&config.character_bounds())?;

        self.generated += 1;
        let character = Character {
            owner: actor.clone(),
            stats,
            serial,
        };
        Ok(self.characters.entry(actor.clone()).or_insert(character))
    }

    pub fn character_of(&self, actor: &ActorId) -> Result<&Character, StateError> {
        self.characters
            .get(actor)
            .ok_or_else(|| StateError::UnknownCharacter {
                actor: actor.clone(),
            })
    }

    pub fn contains(&self, actor: &ActorId) -> bool {
        self.characters.contains_key(actor)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Characters in actor order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }
}
