//! Route path → access requirement

use super::Feature;
use crate::config::RoutesConfig;

/// What a route requires before it renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable without a session (the login entry point)
    Public,
    /// Needs a session, and the given permission when present
    Protected(Option<&'static str>),
}

/// Resolves route paths to access requirements
#[derive(Debug, Clone)]
pub struct RouteTable {
    login_path: String,
}

impl RouteTable {
    pub fn new(routes: &RoutesConfig) -> Self {
        Self {
            login_path: routes.login_path.clone(),
        }
    }

    /// Access requirement of `path`
    ///
    /// Feature routes and their sub-paths (`/membres/42`) require the feature's
    /// permission; any other path only requires a session. Paths are compared
    /// in canonical form, so alternate spellings of a feature route resolve
    /// to the same requirement.
    pub fn resolve(&self, path: &str) -> RouteAccess {
        let path = normalize(path);
        if path == normalize(&self.login_path) {
            return RouteAccess::Public;
        }

        let feature = Feature::ALL.into_iter().find(|f| {
            let route = f.route();
            path == route
                || path
                    .strip_prefix(route)
                    .is_some_and(|rest| rest.starts_with('/'))
        });

        RouteAccess::Protected(feature.map(|f| f.permission_key()))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(&RoutesConfig::default())
    }
}

/// Canonical form of a route path
///
/// Query and fragment are dropped, a leading `/` is implied, empty and `.`
/// segments are removed, `..` pops the previous segment (never above the
/// root), and the result is lowercased.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or(path);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    format!("/{}", segments.join("/")).to_lowercase()
}
