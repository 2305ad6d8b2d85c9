//! Repository contracts for saving and loading game state.

use game_core::GameState;

use super::error::Result;

/// Durable keyed storage for committed game states.
///
/// States are keyed by the nonce they were committed at. The runtime writes
/// one snapshot per successful mutating call and resumes from [`latest`].
///
/// [`latest`]: StateRepository::latest
pub trait StateRepository: Send + Sync {
    /// Save a game state indexed by nonce
    fn save(&self, nonce: u64, state: &GameState) -> Result<()>;

    /// Load a game state by nonce
    fn load(&self, nonce: u64) -> Result<Option<GameState>>;

    /// Check if a state exists
    fn exists(&self, nonce: u64) -> bool;

    /// Delete a state
    fn delete(&self, nonce: u64) -> Result<()>;

    /// List all available state nonces in ascending order
    fn list_nonces(&self) -> Result<Vec<u64>>;

    /// Load the state with the highest nonce, if any.
    fn latest(&self) -> Result<Option<GameState>> {
        match self.list_nonces()?.last() {
            Some(&nonce) => self.load(nonce),
            None => Ok(None),
        }
    }

    /// Delete all but the `keep` newest states and return how many went.
    ///
    /// The newest state is always kept, even for `keep == 0`.
    fn prune(&self, keep: usize) -> Result<usize> {
        let nonces = self.list_nonces()?;
        let excess = nonces.len().saturating_sub(keep.max(1));
        for &nonce in &nonces[..excess] {
            self.delete(nonce)?;
        }
        Ok(excess)
    }
}
