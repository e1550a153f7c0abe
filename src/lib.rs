//! # LJMDI Portal
//!
//! Session handling and permission gating for the LJMDI association portal.
//!
//! ## Features
//!
//! - **Session store**: the authenticated identity survives restarts through a
//!   durable key-value backend
//! - **Role-based permissions**: a fixed role → feature table drives every
//!   access decision
//! - **Route guard**: wait, redirect to login, redirect to the landing page, or render
//! - **Authenticated client**: bearer credential on every call; a 401 ends the session
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ljmdi_portal::{Portal, PortalConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PortalConfig::from_file("config/ljmdi.yaml").await?;
//!     let portal = Portal::from_config(config).await?;
//!
//!     portal.auth.login("tresorier@ljmdi.org", "secret").await?;
//!     println!("{}", portal.open("/contributions"));
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod client;
pub mod config;
pub mod navigation;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{AuthService, GuardDecision, PermissionTable, RouteGuard, Session, SessionState, User};
pub use client::PortalClient;
pub use config::PortalConfig;
pub use navigation::{Feature, RouteAccess, RouteTable};
pub use utils::error::{PortalError, Result};

use auth::{HttpAuthBackend, SessionStore};
use std::sync::Arc;
use tracing::info;

/// Every collaborator of a running portal, wired from one configuration
#[derive(Debug, Clone)]
pub struct Portal {
    pub config: PortalConfig,
    pub auth: Arc<AuthService>,
    pub client: PortalClient,
    pub guard: RouteGuard,
    pub routes: RouteTable,
}

impl Portal {
    /// Wire the portal against the HTTP backend and the file-backed session store
    ///
    /// The persisted session is restored before this returns.
    pub async fn from_config(config: PortalConfig) -> Result<Self> {
        config.validate()?;

        let storage = storage::open_file_store(&config.session).await?;
        let store = SessionStore::new(storage, config.session.storage_key.clone());
        let backend = Arc::new(HttpAuthBackend::new(&config.api)?);
        let auth = Arc::new(AuthService::restore(backend, store, config.permission_table()).await);

        Self::assemble(config, auth)
    }

    /// Wire the portal around an already constructed auth service
    pub fn assemble(config: PortalConfig, auth: Arc<AuthService>) -> Result<Self> {
        let client = PortalClient::new(config.api.clone(), auth.clone())?;
        let guard = RouteGuard::new(&config.routes);
        let routes = RouteTable::new(&config.routes);

        info!("Portal ready (session {})", auth.state());
        Ok(Self {
            config,
            auth,
            client,
            guard,
            routes,
        })
    }

    /// Guard decision for navigating to `path`
    pub fn open(&self, path: &str) -> GuardDecision {
        match self.routes.resolve(path) {
            RouteAccess::Public => GuardDecision::Render,
            RouteAccess::Protected(permission) => self.guard.check(&self.auth, permission),
        }
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata exported by the build script
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
