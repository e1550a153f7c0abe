//! Error handling for the portal
//!
//! This module defines the error type shared by every layer of the crate,
//! the helpers used to build it, and the decoding of backend error bodies.

mod helpers;
mod response;
mod types;

pub use response::ErrorBody;
pub use types::{PortalError, Result};
