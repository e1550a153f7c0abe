//! Authenticated API client
//!
//! Every request carries the session's bearer credential. A 401 from any
//! endpoint clears the session, so callers only have to redirect to login.

mod client;
mod profile;

pub use client::PortalClient;

use crate::config::ApiConfig;
use crate::utils::error::{PortalError, Result};

/// Build the shared HTTP client for the backend
pub fn build_http_client(config: &ApiConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!("ljmdi-portal/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PortalError::Config(format!("Failed to create HTTP client: {}", e)))
}
