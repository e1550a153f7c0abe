//! Utility modules for the portal
//!
//! - **error**: the crate-wide error type and backend error body decoding
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

/// Mask a bearer credential for log output
///
/// Long tokens keep their first and last two characters so two sessions can
/// still be told apart in logs; short ones are fully hidden.
pub fn redact_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
