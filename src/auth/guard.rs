//! Route guard
//!
//! Decides, from the session alone, whether a protected view renders, waits,
//! or redirects.

use super::service::AuthService;
use crate::config::RoutesConfig;
use serde::Serialize;
use std::fmt;

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "path", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Session resolution in progress; show a neutral waiting indicator
    Wait,
    /// No session; go to the login entry point
    RedirectToLogin(String),
    /// Valid session lacking the permission; go to the default landing view
    RedirectToLanding(String),
    /// Render the requested view
    Render,
}

impl fmt::Display for GuardDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardDecision::Wait => write!(f, "wait"),
            GuardDecision::RedirectToLogin(path) => write!(f, "redirect to login ({})", path),
            GuardDecision::RedirectToLanding(path) => write!(f, "redirect to landing ({})", path),
            GuardDecision::Render => write!(f, "render"),
        }
    }
}

/// Stateless gate in front of protected views
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
    landing_path: String,
}

impl RouteGuard {
    pub fn new(routes: &RoutesConfig) -> Self {
        Self {
            login_path: routes.login_path.clone(),
            landing_path: routes.landing_path.clone(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Pure decision over the session flags and an optional required permission
    pub fn decide<F>(
        &self,
        is_authenticated: bool,
        loading: bool,
        required_permission: Option<&str>,
        has_permission: F,
    ) -> GuardDecision
    where
        F: Fn(&str) -> bool,
    {
        if loading {
            return GuardDecision::Wait;
        }
        if !is_authenticated {
            return GuardDecision::RedirectToLogin(self.login_path.clone());
        }
        match required_permission {
            Some(key) if !has_permission(key) => {
                GuardDecision::RedirectToLanding(self.landing_path.clone())
            }
            _ => GuardDecision::Render,
        }
    }

    /// Decide against the live state of `auth`
    pub fn check(&self, auth: &AuthService, required_permission: Option<&str>) -> GuardDecision {
        let session = auth.session();
        self.decide(
            session.is_authenticated(),
            session.is_loading(),
            required_permission,
            |key| auth.has_permission(key),
        )
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(&RoutesConfig::default())
    }
}
