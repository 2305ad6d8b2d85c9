use crate::config::GameConfig;
use crate::state::{ActorId, Boss, Character, GameState};

use super::ExecuteError;

/// Read-only calls. Like every other call they require an initialized game.
#[derive(Clone, Copy, Debug)]
pub struct GameQuery<'a> {
    state: &'a GameState,
}

impl<'a> GameQuery<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    pub fn config(&self) -> Result<&'a GameConfig, ExecuteError> {
        self.state.config().ok_or(ExecuteError::NotInitialized)
    }

    /// True iff `name` is the ruling boss. An unset ruler or unknown name is `false`.
    pub fn is_ruler(&self, name: &str) -> Result<bool, ExecuteError> {
        self.config()?;
        Ok(self.state.bosses.is_ruler(name))
    }

    /// Current health of the ruling boss.
    pub fn current_boss_health(&self) -> Result<u32, ExecuteError> {
        self.config()?;
        Ok(self.state.bosses.current_boss_health()?)
    }

    pub fn ruling_boss(&self) -> Result<&'a Boss, ExecuteError> {
        self.config()?;
        Ok(self.state.bosses.ruling_boss()?)
    }

    pub fn character_of(&self, actor: &ActorId) -> Result<&'a Character, ExecuteError> {
        self.config()?;
        Ok(self.state.characters.character_of(actor)?)
    }

    /// Looks up a boss by name; `None` if it does not exist.
    pub fn boss(&self, name: &str) -> Result<Option<&'a Boss>, ExecuteError> {
        self.config()?;
        Ok(self.state.bosses.get(name))
    }
}
