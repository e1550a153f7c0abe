//! Test fixtures and data factories

use ljmdi_portal::config::{ApiConfig, PortalConfig, SessionConfig};
use serde_json::{Value, json};
use std::path::Path;

/// Factory for backend user records
pub struct UserFactory;

impl UserFactory {
    /// A user record as the backend returns it
    pub fn record(role: &str) -> Value {
        json!({
            "id": 7,
            "email": format!("{}@ljmdi.org", role),
            "nom": "Mukendi",
            "prenom": "Grace",
            "role": role,
        })
    }

    /// A successful login body for `role`
    pub fn login_body(role: &str, token: &str) -> Value {
        json!({
            "message": "Connexion réussie",
            "user": Self::record(role),
            "token": token,
        })
    }
}

/// Configuration pointing at `base_url` with session files under `dir`
pub fn portal_config(base_url: &str, dir: &Path) -> PortalConfig {
    PortalConfig {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        },
        session: SessionConfig {
            storage_dir: dir.to_string_lossy().into_owned(),
            ..Default::default()
        },
        ..Default::default()
    }
}
