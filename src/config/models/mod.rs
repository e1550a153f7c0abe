//! Configuration data models
//!
//! This module defines all configuration structures used by the portal client.

#![allow(missing_docs)]

pub mod api;
pub mod logging;
pub mod routes;
pub mod session;

// Re-export all configuration types
pub use api::*;
pub use logging::*;
pub use routes::*;
pub use session::*;

/// Default backend base URL
pub fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_login_endpoint() -> String {
    "/login".to_string()
}

pub fn default_profile_endpoint() -> String {
    "/profile".to_string()
}

/// Directory holding the durable session record
pub fn default_storage_dir() -> String {
    ".ljmdi".to_string()
}

/// Storage key of the durable session record
pub fn default_storage_key() -> String {
    "ljmdi_session".to_string()
}

pub fn default_login_route() -> String {
    "/login".to_string()
}

pub fn default_landing_route() -> String {
    "/".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
