//! In-memory StateRepository for tests and throwaway games.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::GameState;

use crate::repository::{RepositoryError, Result, StateRepository};

/// Snapshots held in an ordered map behind a lock.
#[derive(Default)]
pub struct InMemoryStateRepo {
    states: RwLock<BTreeMap<u64, GameState>>,
}

impl InMemoryStateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with `state` under its own nonce.
    pub fn with_state(state: GameState) -> Self {
        let mut states = BTreeMap::new();
        states.insert(state.nonce, state);
        Self {
            states: RwLock::new(states),
        }
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.states.read().map(|states| states.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, nonce: u64, state: &GameState) -> Result<()> {
        self.states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .insert(nonce, state.clone());
        Ok(())
    }

    fn load(&self, nonce: u64) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(&nonce).cloned())
    }

    fn exists(&self, nonce: u64) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(&nonce))
            .unwrap_or(false)
    }

    fn delete(&self, nonce: u64) -> Result<()> {
        self.states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .remove(&nonce);
        Ok(())
    }

    fn list_nonces(&self) -> Result<Vec<u64>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.keys().copied().collect())
    }

    fn latest(&self) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.values().next_back().cloned())
    }
}
