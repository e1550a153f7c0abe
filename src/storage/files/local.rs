//! Local file system storage implementation

use crate::storage::KeyValueStore;
use crate::utils::error::{PortalError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File-backed key/value store
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Create a new file store rooted at `base_path`
    pub async fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        // Create directory if it doesn't exist
        fs::create_dir_all(&path).await.map_err(|e| {
            PortalError::Storage(format!("Failed to create storage directory: {}", e))
        })?;

        info!("Local file storage initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    /// Directory holding the stored values
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get file path for a given key
    pub(crate) fn get_file_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');
        if !valid {
            return Err(PortalError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.get_file_path(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortalError::Storage(format!("Failed to read {}: {}", key, e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.get_file_path(key)?;
        let tmp_path = file_path.with_extension("json.tmp");

        // Write then rename so readers never observe a half-written record
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| PortalError::Storage(format!("Failed to write {}: {}", key, e)))?;
        fs::rename(&tmp_path, &file_path)
            .await
            .map_err(|e| PortalError::Storage(format!("Failed to commit {}: {}", key, e)))?;

        debug!("Stored key: {}", key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file_path = self.get_file_path(key)?;

        match fs::remove_file(&file_path).await {
            Ok(()) => {
                debug!("Removed key: {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortalError::Storage(format!(
                "Failed to delete {}: {}",
                key, e
            ))),
        }
    }
}
