//! Session persistence configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the durable session record lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory of the file-backed store
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    /// Key the session record is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
        }
    }
}

impl SessionConfig {
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }
}
