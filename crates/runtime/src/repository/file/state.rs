//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::{GameState, compute_state_root};

use crate::repository::{RepositoryError, Result, StateRepository};

/// Stores each snapshot as `state_{nonce}.bin` (bincode) next to a
/// `state_{nonce}.root` file holding the hex state root.
///
/// Both files are written through a temp file and an atomic rename. On load
/// the root is recomputed and compared, so a truncated or edited snapshot is
/// reported as [`RepositoryError::CorruptedData`] instead of being resumed.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Opens (and creates if needed) a repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn state_path(&self, nonce: u64) -> PathBuf {
        self.base_dir.join(format!("state_{}.bin", nonce))
    }

    fn root_path(&self, nonce: u64) -> PathBuf {
        self.base_dir.join(format!("state_{}.root", nonce))
    }

    fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut temp_path = path.as_os_str().to_owned();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, nonce: u64, state: &GameState) -> Result<()> {
        let bytes = bincode::serialize(state)?;
        let root = compute_state_root(state)?;

        // Root first: a snapshot without its root is never listed as loadable.
        Self::write_atomic(&self.root_path(nonce), hex::encode(root).as_bytes())?;
        Self::write_atomic(&self.state_path(nonce), &bytes)?;

        tracing::debug!(
            nonce,
            root = %hex::encode(root),
            "Saved state to {}",
            self.state_path(nonce).display()
        );
        Ok(())
    }

    fn load(&self, nonce: u64) -> Result<Option<GameState>> {
        let path = self.state_path(nonce);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let state: GameState = bincode::deserialize(&bytes)?;

        let expected = fs::read_to_string(self.root_path(nonce))?;
        let actual = hex::encode(compute_state_root(&state)?);
        if expected.trim() != actual {
            return Err(RepositoryError::CorruptedData(format!(
                "state {} root mismatch: expected {}, found {}",
                nonce,
                expected.trim(),
                actual
            )));
        }
        if state.nonce != nonce {
            return Err(RepositoryError::CorruptedData(format!(
                "state file {} holds nonce {}",
                nonce, state.nonce
            )));
        }

        tracing::debug!(nonce, "Loaded state from {}", path.display());
        Ok(Some(state))
    }

    fn exists(&self, nonce: u64) -> bool {
        self.state_path(nonce).exists()
    }

    fn delete(&self, nonce: u64) -> Result<()> {
        for path in [self.state_path(nonce), self.root_path(nonce)] {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
        tracing::debug!(nonce, "Deleted state");
        Ok(())
    }

    fn list_nonces(&self) -> Result<Vec<u64>> {
        let mut nonces = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(nonce_str) = filename
                    .strip_prefix("state_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(nonce) = nonce_str.parse::<u64>()
            {
                nonces.push(nonce);
            }
        }

        nonces.sort_unstable();
        Ok(nonces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameEngine;

    fn state_at(nonce: u64) -> GameState {
        let mut state = GameState::new();
        GameEngine::new(&mut state).initialize(1000).unwrap();
        state.nonce = nonce;
        state
    }

    #[test]
    fn delete_removes_snapshot_and_root() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path()).unwrap();

        repo.save(1, &state_at(1)).unwrap();
        assert!(repo.exists(1));
        assert!(!repo.exists(2));

        repo.delete(1).unwrap();
        assert!(!repo.exists(1));
        assert!(!dir.path().join("state_1.bin").exists());
        assert!(!dir.path().join("state_1.root").exists());
        assert_eq!(repo.load(1).unwrap(), None);
        assert!(repo.latest().unwrap().is_none());

        // Deleting a missing snapshot is not an error.
        repo.delete(1).unwrap();
    }

    #[test]
    fn prune_keeps_newest_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path()).unwrap();
        for nonce in 1..=5 {
            repo.save(nonce, &state_at(nonce)).unwrap();
        }

        assert_eq!(repo.prune(2).unwrap(), 3);
        assert_eq!(repo.list_nonces().unwrap(), vec![4, 5]);
        assert!(!dir.path().join("state_3.root").exists());
        assert_eq!(repo.latest().unwrap().map(|state| state.nonce), Some(5));

        assert_eq!(repo.prune(0).unwrap(), 1);
        assert_eq!(repo.list_nonces().unwrap(), vec![5]);
    }

    #[test]
    fn stray_files_are_not_listed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path()).unwrap();
        repo.save(7, &state_at(7)).unwrap();
        fs::write(dir.path().join("notes.txt"), b"hi").unwrap();
        fs::write(dir.path().join("state_x.bin"), b"junk").unwrap();

        assert_eq!(repo.list_nonces().unwrap(), vec![7]);
    }
}
