//! Configuration management for the portal client
//!
//! This module handles loading, validation, and management of the client configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::auth::rbac::PermissionTable;
use crate::utils::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the portal client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Session persistence configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// Navigation entry points
    #[serde(default)]
    pub routes: RoutesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Replacement role table; the built-in table is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<HashMap<String, Vec<String>>>,
}

impl PortalConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PortalError::Config(format!("Failed to read config file: {}", e)))?;

        let config: PortalConfig = serde_yaml::from_str(&content)
            .map_err(|e| PortalError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let config = Self::default().with_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Permission table in effect for this configuration
    pub fn permission_table(&self) -> PermissionTable {
        match &self.permissions {
            Some(roles) => PermissionTable::from_map(roles.clone()),
            None => PermissionTable::default(),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(self).map_err(PortalError::Config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PortalError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
