//! Authentication and session types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// User record as returned by the backend
///
/// Only `role` is interpreted by the portal; every other field is carried
/// through untouched so profile views can display whatever the backend sends.
/// A record without a role (absent or `null`) deserializes with an empty role,
/// which grants nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "role_or_empty")]
    pub role: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

fn role_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Create a user record with the given role and no other attributes
    pub fn new<S: Into<String>>(role: S) -> Self {
        Self {
            role: role.into(),
            attributes: Map::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute<K: Into<String>>(mut self, key: K, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn email(&self) -> Option<&str> {
        self.attribute("email").and_then(Value::as_str)
    }

    /// Name shown in the header bar: "prenom nom", then `name`, then the email
    pub fn display_name(&self) -> String {
        let prenom = self.attribute("prenom").and_then(Value::as_str);
        let nom = self.attribute("nom").and_then(Value::as_str);
        match (prenom, nom) {
            (Some(p), Some(n)) => format!("{} {}", p, n),
            (Some(single), None) | (None, Some(single)) => single.to_string(),
            (None, None) => self
                .attribute("name")
                .and_then(Value::as_str)
                .or_else(|| self.email())
                .unwrap_or("?")
                .to_string(),
        }
    }
}

/// Login request body
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Raw login response body
///
/// Both fields are optional here so a malformed body is still decoded and can be
/// rejected explicitly by the auth service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

/// An authenticated identity: a user record paired with its bearer credential
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    user: User,
    token: String,
}

impl Identity {
    pub fn new(user: User, token: String) -> Self {
        Self { user, token }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace the user record, keeping the bearer credential
    pub(crate) fn with_user(self, user: User) -> Self {
        Self {
            user,
            token: self.token,
        }
    }
}

/// Lifecycle state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::Authenticating => "authenticating",
            SessionState::Authenticated => "authenticated",
        };
        write!(f, "{}", s)
    }
}

/// Snapshot of the current session
///
/// `user` and `token` are present together or not at all, and the session is
/// authenticated exactly when they are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
    loading: bool,
}

impl Session {
    /// The logged-out session
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    pub(crate) fn from_parts(identity: Option<Identity>, loading: bool) -> Self {
        Self { identity, loading }
    }

    pub fn user(&self) -> Option<&User> {
        self.identity.as_ref().map(Identity::user)
    }

    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(Identity::token)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn role(&self) -> Option<&str> {
        self.user().map(|u| u.role.as_str())
    }

    pub fn state(&self) -> SessionState {
        if self.loading {
            SessionState::Authenticating
        } else if self.identity.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }
}
