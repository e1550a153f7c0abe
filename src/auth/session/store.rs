//! Session store backed by a key/value store

use super::record::PersistedSession;
use crate::auth::types::{Identity, Session, User};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reads and writes the durable session record
///
/// Persistence is best-effort: write and delete failures are logged and
/// swallowed, the in-memory session stays authoritative.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("key", &self.key).finish()
    }
}

impl SessionStore {
    pub fn new<S: Into<String>>(backend: Arc<dyn KeyValueStore>, key: S) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Storage key of the session record
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted session
    ///
    /// Absent, unparsable, unversioned or otherwise unusable records yield the
    /// empty session; the latter are removed from storage.
    pub async fn load(&self) -> Session {
        let raw = match self.backend.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No persisted session under {}", self.key);
                return Session::empty();
            }
            Err(e) => {
                warn!("Failed to read persisted session: {}", e);
                return Session::empty();
            }
        };

        let identity = match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(record) => record.into_identity(),
            Err(e) => {
                warn!("Persisted session is corrupted: {}", e);
                None
            }
        };

        match identity {
            Some(identity) => {
                info!("Restored session for role {:?}", identity.user().role);
                Session::authenticated(identity)
            }
            None => {
                warn!("Discarding unusable persisted session");
                self.clear().await;
                Session::empty()
            }
        }
    }

    /// Persist `{user, token}`, overwriting any prior record
    pub async fn save(&self, user: &User, token: &str) {
        let record = PersistedSession::new(user.clone(), token.to_string());
        let serialized = match serde_json::to_string(&record) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize session: {}", e);
                return;
            }
        };

        match self.backend.set(&self.key, &serialized).await {
            Ok(()) => debug!("Session persisted under {}", self.key),
            Err(e) => warn!("Failed to persist session: {}", e),
        }
    }

    /// Persist an identity
    pub async fn save_identity(&self, identity: &Identity) {
        self.save(identity.user(), identity.token()).await
    }

    /// Remove the durable record
    pub async fn clear(&self) {
        match self.backend.remove(&self.key).await {
            Ok(()) => debug!("Session record {} removed", self.key),
            Err(e) => warn!("Failed to remove persisted session: {}", e),
        }
    }
}
