//! Auth service: the single writer of session state

mod service;

pub use service::AuthService;
