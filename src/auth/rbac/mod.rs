//! Role-Based Access Control (RBAC) system
//!
//! A static table mapping role names to the permission keys they grant.
//! Lookups of unknown roles yield the empty set: access is denied, never an error.

pub mod keys;
mod permissions;
mod system;

// Re-export public types and structs
pub use system::PermissionTable;
