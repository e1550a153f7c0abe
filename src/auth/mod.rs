//! Authentication and authorization
//!
//! Session lifecycle (login, logout, profile refresh), the role permission
//! table, durable session persistence, and the route guard.

pub mod backend;
pub mod guard;
pub mod rbac;
pub mod service;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use backend::{AuthBackend, HttpAuthBackend};
pub use guard::{GuardDecision, RouteGuard};
pub use rbac::PermissionTable;
pub use service::AuthService;
pub use session::SessionStore;
pub use types::{Credentials, Identity, LoginResponse, Session, SessionState, User};
