//! Core auth service implementation

use crate::auth::backend::AuthBackend;
use crate::auth::rbac::PermissionTable;
use crate::auth::session::SessionStore;
use crate::auth::types::{Credentials, Identity, Session, SessionState, User};
use crate::utils::error::{PortalError, Result};
use crate::utils::redact_token;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct AuthState {
    identity: Option<Identity>,
    /// Logins currently awaiting the backend
    in_flight: usize,
    /// Advanced by every logout; logins started in an older epoch are stale
    epoch: u64,
}

/// Mediates every session transition and answers permission queries
///
/// Constructed explicitly with its collaborators so tests can provide a stub
/// backend, an in-memory store, and an alternate permission table.
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
    store: SessionStore,
    permissions: PermissionTable,
    state: RwLock<AuthState>,
    /// Serializes state transitions together with their storage writes
    writer: Mutex<()>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("store", &self.store)
            .field("state", &self.state())
            .finish()
    }
}

/// Keeps `in_flight` accurate even when a login future is dropped mid-way
struct InFlightGuard<'a> {
    state: &'a RwLock<AuthState>,
    settled: bool,
}

impl<'a> InFlightGuard<'a> {
    fn enter(state: &'a RwLock<AuthState>) -> (Self, u64) {
        let mut s = state.write();
        s.in_flight += 1;
        let epoch = s.epoch;
        (
            Self {
                state,
                settled: false,
            },
            epoch,
        )
    }

    /// Publish the login outcome and leave the loading state in one step
    fn settle(mut self, identity: Option<Identity>) {
        let mut s = self.state.write();
        s.identity = identity;
        s.in_flight = s.in_flight.saturating_sub(1);
        self.settled = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let mut s = self.state.write();
            s.in_flight = s.in_flight.saturating_sub(1);
        }
    }
}

impl AuthService {
    /// Create a service whose initial session is read from `store`
    pub async fn restore(
        backend: Arc<dyn AuthBackend>,
        store: SessionStore,
        permissions: PermissionTable,
    ) -> Self {
        let session = store.load().await;
        info!("Auth service starting in state {}", session.state());
        if let Some(identity) = session.identity() {
            warn_if_unknown_role(&permissions, identity.user());
        }

        Self {
            backend,
            store,
            permissions,
            state: RwLock::new(AuthState {
                identity: session.identity().cloned(),
                ..Default::default()
            }),
            writer: Mutex::new(()),
        }
    }

    /// Authenticate against the backend
    ///
    /// On success the session is persisted and returned. On any failure the
    /// session is reset to logged out and the error is returned for display.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let (in_flight, epoch) = InFlightGuard::enter(&self.state);
        let outcome = self.authenticate(email, password).await;

        let _writer = self.writer.lock().await;

        if self.state.read().epoch != epoch {
            drop(in_flight);
            debug!("Login settled after a logout; discarding its result");
            return Err(PortalError::unauthenticated(
                "Login was superseded by a logout",
            ));
        }

        match outcome {
            Ok(identity) => {
                info!(
                    "Login succeeded for role {:?} (token {})",
                    identity.user().role,
                    redact_token(identity.token())
                );
                warn_if_unknown_role(&self.permissions, identity.user());
                self.store.save_identity(&identity).await;
                in_flight.settle(Some(identity));
                Ok(self.session())
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.store.clear().await;
                in_flight.settle(None);
                Err(e)
            }
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(PortalError::validation("Email et mot de passe requis"));
        }

        let response = self
            .backend
            .login(&Credentials::new(email, password))
            .await?;

        let user = response.user.ok_or_else(|| {
            PortalError::invalid_credentials_response("Login response has no user")
        })?;
        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                PortalError::invalid_credentials_response("Login response has no token")
            })?;

        Ok(Identity::new(user, token))
    }

    /// Clear the session; safe to call when already logged out
    pub async fn logout(&self) {
        self.reset("logout").await;
    }

    /// Clear the session because the backend refused its bearer credential
    pub async fn expire_session(&self) {
        self.expire(None).await;
    }

    /// Clear the session if `token` is still its bearer credential
    ///
    /// A rejection of a credential that has since been replaced by a newer
    /// login is ignored.
    pub async fn expire_credential(&self, token: &str) {
        self.expire(Some(token)).await;
    }

    /// Expiry leaves the epoch alone: a login still awaiting the backend will
    /// carry a fresh credential and is allowed to settle.
    async fn expire(&self, rejected: Option<&str>) {
        let _writer = self.writer.lock().await;
        {
            let mut state = self.state.write();
            let superseded = match (&state.identity, rejected) {
                (Some(identity), Some(token)) => identity.token() != token,
                _ => false,
            };
            if superseded {
                debug!("Ignoring rejection of a superseded credential");
                return;
            }
            state.identity = None;
        }
        self.store.clear().await;
        warn!("Bearer credential rejected by the backend; session cleared");
    }

    async fn reset(&self, reason: &str) {
        let _writer = self.writer.lock().await;
        {
            let mut state = self.state.write();
            state.epoch += 1;
            state.identity = None;
        }
        self.store.clear().await;
        info!("Session cleared ({})", reason);
    }

    /// Replace the user record, keeping the current token
    ///
    /// Local only: the caller has already saved the change server-side.
    pub async fn update_user(&self, user: User) -> Result<()> {
        let _writer = self.writer.lock().await;

        let identity = {
            let mut state = self.state.write();
            let current = state.identity.take().ok_or_else(|| {
                PortalError::unauthenticated("Cannot update the user of an empty session")
            })?;
            if current.user().role != user.role {
                warn_if_unknown_role(&self.permissions, &user);
            }
            let updated = current.with_user(user);
            state.identity = Some(updated.clone());
            updated
        };

        self.store.save_identity(&identity).await;
        debug!("User record updated for role {:?}", identity.user().role);
        Ok(())
    }

    /// Whether the current user's role grants `key`; `false` when logged out
    pub fn has_permission(&self, key: &str) -> bool {
        match &self.state.read().identity {
            Some(identity) => self.permissions.allows(&identity.user().role, key),
            None => false,
        }
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        let state = self.state.read();
        Session::from_parts(state.identity.clone(), state.in_flight > 0)
    }

    pub fn state(&self) -> SessionState {
        self.session().state()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().in_flight > 0
    }

    /// Current bearer credential, if any
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .identity
            .as_ref()
            .map(|i| i.token().to_string())
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().identity.as_ref().map(|i| i.user().clone())
    }

    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }
}

/// Called when a session is set up, not on permission lookups
fn warn_if_unknown_role(permissions: &PermissionTable, user: &User) {
    if !permissions.has_role(&user.role) {
        warn!("Unknown role {:?}: no permissions granted", user.role);
    }
}
