//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use game_core::GameConfig;

/// Where the client keeps its data and how it deploys new games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root for stored snapshots (`state/`) and the log file.
    pub data_dir: PathBuf,
    /// `max_value` used by `deploy` when the flag is omitted.
    pub max_value: u32,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Directory for snapshots and logs (default: platform data dir)
    /// - `ARENA_MAX_VALUE` - Stat ceiling for `deploy` (default: 1000)
    pub fn from_env() -> Self {
        let data_dir = env::var_os("ARENA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let max_value = read_env::<u32>("ARENA_MAX_VALUE")
            .filter(|&value| value > 0)
            .unwrap_or(GameConfig::DEFAULT_MAX_VALUE);

        Self {
            data_dir,
            max_value,
        }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join("arena"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
