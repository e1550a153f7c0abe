//! Session persistence
//!
//! Mirrors the current identity into durable storage as a single versioned
//! record so it survives a restart. Reads never fail: anything unreadable is
//! discarded and the session starts logged out.

mod record;
mod store;

pub use record::{PersistedSession, SESSION_SCHEMA_VERSION};
pub use store::SessionStore;
