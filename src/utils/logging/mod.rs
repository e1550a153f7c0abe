//! Logging setup
//!
//! `RUST_LOG` wins over the configured level when it is set.

use crate::config::LoggingConfig;
use crate::utils::error::{PortalError, Result};
use tracing_subscriber::EnvFilter;

/// Build the level filter for the given configuration
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(&config.level),
    }
    .map_err(|e| PortalError::config(format!("Invalid log filter: {}", e)))
}

/// Install the global tracing subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| PortalError::config(format!("Failed to initialize logging: {}", e)))
}
