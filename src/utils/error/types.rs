//! Error types for the portal

use thiserror::Error;

/// Result type alias for the portal
pub type Result<T> = std::result::Result<T, PortalError>;

/// Main error type for the portal
#[derive(Error, Debug)]
pub enum PortalError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend rejected the submitted email/password pair
    #[error("Credentials rejected: {0}")]
    CredentialsRejected(String),

    /// A login call succeeded at the transport level but the body lacked `user` or `token`
    #[error("Invalid credentials response: {0}")]
    InvalidCredentialsResponse(String),

    /// The bearer credential was refused by the backend (expired or revoked)
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// No session is present for an operation that needs one
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// The session is valid but lacks the permission for the requested feature
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Network / transport failures
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success responses that are not covered by a more specific variant
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Durable storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}
