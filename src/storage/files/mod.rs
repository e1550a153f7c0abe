//! File storage implementation
//!
//! One file per key under a base directory.

mod local;

// Re-export public types
pub use local::FileStore;
