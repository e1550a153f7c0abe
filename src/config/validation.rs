//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::PortalConfig;
use super::models::*;
use tracing::debug;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for PortalConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating portal configuration");

        self.api.validate()?;
        self.session.validate()?;
        self.routes.validate()?;
        self.logging.validate()?;

        if let Some(roles) = &self.permissions {
            for role in roles.keys() {
                if role.trim().is_empty() {
                    return Err("Permission table contains an empty role name".to_string());
                }
            }
        }

        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("API base_url has invalid URL format: {}", e))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "API base_url must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if self.timeout_secs == 0 {
            return Err("API timeout must be greater than 0".to_string());
        }

        if !self.login_path.starts_with('/') || !self.profile_path.starts_with('/') {
            return Err("API endpoint paths must start with '/'".to_string());
        }

        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.storage_dir.trim().is_empty() {
            return Err("Session storage_dir cannot be empty".to_string());
        }

        let key_ok = !self.storage_key.is_empty()
            && self
                .storage_key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');
        if !key_ok {
            return Err(format!(
                "Session storage_key must be non-empty and use [A-Za-z0-9_.-], got: {:?}",
                self.storage_key
            ));
        }

        Ok(())
    }
}

impl Validate for RoutesConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.login_path.starts_with('/') || !self.landing_path.starts_with('/') {
            return Err("Route paths must start with '/'".to_string());
        }

        if self.login_path == self.landing_path {
            return Err("Login and landing routes must differ".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}
