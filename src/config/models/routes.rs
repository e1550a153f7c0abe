//! Navigation entry points

use super::*;
use serde::{Deserialize, Serialize};

/// Entry points the route guard redirects to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Login entry point, used for unauthenticated or expired sessions
    #[serde(default = "default_login_route")]
    pub login_path: String,
    /// Default authenticated landing view, used for under-privileged sessions
    #[serde(default = "default_landing_route")]
    pub landing_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_route(),
            landing_path: default_landing_route(),
        }
    }
}
