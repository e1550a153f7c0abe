//! On-disk layout of the session record

use crate::auth::types::{Identity, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version tag written into every persisted record
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Persisted `{version, user, token}` record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Missing on records written before versioning; such records are discarded
    #[serde(default)]
    pub version: Option<u32>,
    pub user: User,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl PersistedSession {
    pub fn new(user: User, token: String) -> Self {
        Self {
            version: Some(SESSION_SCHEMA_VERSION),
            user,
            token,
            saved_at: Some(Utc::now()),
        }
    }

    /// Turn the record into an identity if it is usable
    pub fn into_identity(self) -> Option<Identity> {
        if self.version != Some(SESSION_SCHEMA_VERSION) || self.token.is_empty() {
            return None;
        }
        Some(Identity::new(self.user, self.token))
    }
}
