use sha2::{Digest, Sha256};

use super::GameState;

/// Computes a 32-byte commitment to the full game state.
///
/// SHA-256 over the bincode encoding. Registries are ordered maps, so equal
/// states always hash equally regardless of insertion order.
pub fn compute_state_root(state: &GameState) -> Result<[u8; 32], bincode::Error> {
    let bytes = bincode::serialize(state)?;
    Ok(Sha256::digest(&bytes).into())
}
