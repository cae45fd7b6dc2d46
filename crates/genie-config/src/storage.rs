//! Local state file location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the persisted client state.
pub const STATE_FILE_NAME: &str = "travel-genie-storage.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Explicit state file. Empty means the per-user data directory.
    #[serde(default)]
    pub state_path: String,
}

impl StorageConfig {
    /// Resolve the state file path.
    ///
    /// Falls back to `./travel-genie-storage.json` when the platform has no
    /// data directory.
    #[must_use]
    pub fn resolved_state_path(&self) -> PathBuf {
        if !self.state_path.is_empty() {
            return PathBuf::from(&self.state_path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(STATE_FILE_NAME),
            |dir| dir.join("travel-genie").join(STATE_FILE_NAME),
        )
    }
}
