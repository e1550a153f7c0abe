//! Integration tests for ljmdi-portal
//!
//! Each test wires a real portal against a wiremock backend and a temporary
//! session directory.

pub mod client_tests;
pub mod config_tests;
pub mod guard_tests;
pub mod login_tests;
