//! Backend API configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Connection settings for the association's REST backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Login endpoint path
    #[serde(default = "default_login_endpoint")]
    pub login_path: String,
    /// Profile endpoint path (read and update the current user)
    #[serde(default = "default_profile_endpoint")]
    pub profile_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            login_path: default_login_endpoint(),
            profile_path: default_profile_endpoint(),
        }
    }
}

impl ApiConfig {
    /// Build the absolute URL of an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Request timeout
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
