//! Decoding of backend error bodies

use serde::Deserialize;

/// Error body returned by the backend on non-success responses
///
/// The backend is not consistent about the field name, so both `message`
/// and `error` are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Message carried in a JSON `message` or `error` field, if any
    pub fn explicit_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message.or(parsed.error))
            .filter(|m| !m.trim().is_empty())
    }

    /// Extract a message from a raw body, falling back to the body text itself
    pub fn message_from(body: &str) -> String {
        Self::explicit_message(body).unwrap_or_else(|| body.trim().to_string())
    }
}
