//! Permission table core functionality

use super::keys::*;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use tracing::debug;

static EMPTY: Lazy<HashSet<String>> = Lazy::new(HashSet::new);

static DEFAULT_ROLES: Lazy<HashMap<String, HashSet<String>>> = Lazy::new(|| {
    let table: [(&str, &[&str]); 6] = [
        (ROLE_ADMIN, ALL),
        (
            ROLE_TRESORIER,
            &[DASHBOARD, CONTRIBUTIONS, CAS_SOCIAUX, PROFIL],
        ),
        (
            ROLE_SECRETAIRE,
            &[MEMBRES, DOCUMENTS, PRESENCES, ACTIVITES, PROFIL],
        ),
        (
            ROLE_CHARGE_DE_DISCIPLINE,
            &[PRESENCES, ACTIVITES, PROFIL, DOCUMENTS],
        ),
        (ROLE_MEMBRE, &[PROFIL, CONTRIBUTIONS]),
        (ROLE_GUEST, &[]),
    ];

    table
        .iter()
        .map(|(role, keys)| {
            (
                role.to_string(),
                keys.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect()
});

/// Immutable role → permission-set table
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionTable {
    pub(super) roles: HashMap<String, HashSet<String>>,
}

impl Default for PermissionTable {
    /// The association's built-in role table
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.clone(),
        }
    }
}

impl PermissionTable {
    /// Build a table from role → keys; duplicate keys collapse
    pub fn from_map<I, K>(roles: HashMap<String, I>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let roles: HashMap<String, HashSet<String>> = roles
            .into_iter()
            .map(|(role, keys)| (role, keys.into_iter().map(Into::into).collect()))
            .collect();

        debug!("Permission table built with {} roles", roles.len());
        Self { roles }
    }

    /// Permission set of `role`; the empty set when the role is unknown
    pub fn permissions_for(&self, role: &str) -> &HashSet<String> {
        match self.roles.get(role) {
            Some(keys) => keys,
            None => {
                debug!("Unknown role {:?}: no permissions granted", role);
                &*EMPTY
            }
        }
    }

    /// Whether `role` is listed in the table
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Role names, sorted
    pub fn roles(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.roles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
