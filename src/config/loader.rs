//! Configuration loading utilities
//!
//! Environment overrides are read through a lookup function so they can be
//! exercised without touching the process environment.

use super::PortalConfig;
use crate::utils::error::{PortalError, Result};
use tracing::debug;

/// Environment variable holding the backend base URL
pub const ENV_API_URL: &str = "LJMDI_API_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_API_TIMEOUT: &str = "LJMDI_API_TIMEOUT";
/// Environment variable holding the session storage directory
pub const ENV_SESSION_DIR: &str = "LJMDI_SESSION_DIR";
/// Environment variable holding the session storage key
pub const ENV_SESSION_KEY: &str = "LJMDI_SESSION_KEY";
/// Environment variable holding the log level
pub const ENV_LOG_LEVEL: &str = "LJMDI_LOG_LEVEL";

impl PortalConfig {
    /// Apply environment overrides on top of this configuration
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup(ENV_API_TIMEOUT) {
            self.api.timeout_secs = timeout
                .parse()
                .map_err(|e| PortalError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(dir) = lookup(ENV_SESSION_DIR) {
            self.session.storage_dir = dir;
        }
        if let Some(key) = lookup(ENV_SESSION_KEY) {
            self.session.storage_key = key;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(self)
    }
}
