//! Durable client-side storage
//!
//! A string-keyed store of string values, the analogue of a browser's local
//! storage. The session store persists its single record through this trait so
//! the backend can be swapped (files on disk, memory for tests).

/// File storage module
pub mod files;
/// In-memory storage module
pub mod memory;

pub use files::FileStore;
pub use memory::MemoryStore;

use crate::config::SessionConfig;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// String-keyed durable storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`; `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any prior value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Open the file-backed store described by the session configuration
pub async fn open_file_store(config: &SessionConfig) -> Result<Arc<dyn KeyValueStore>> {
    info!(
        "Opening session storage at {}",
        config.storage_path().display()
    );
    let store = FileStore::new(config.storage_path()).await?;
    Ok(Arc::new(store))
}
