//! Gated feature areas

use crate::auth::rbac::keys;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A gated area of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Dashboard,
    Membres,
    Contributions,
    Activites,
    Presences,
    Documents,
    CasSociaux,
    Rapports,
    Profil,
}

impl Feature {
    /// Every feature, in menu order
    pub const ALL: [Feature; 9] = [
        Feature::Dashboard,
        Feature::Membres,
        Feature::Contributions,
        Feature::Activites,
        Feature::Presences,
        Feature::Documents,
        Feature::CasSociaux,
        Feature::Rapports,
        Feature::Profil,
    ];

    /// Permission key gating the feature
    pub fn permission_key(&self) -> &'static str {
        match self {
            Feature::Dashboard => keys::DASHBOARD,
            Feature::Membres => keys::MEMBRES,
            Feature::Contributions => keys::CONTRIBUTIONS,
            Feature::Activites => keys::ACTIVITES,
            Feature::Presences => keys::PRESENCES,
            Feature::Documents => keys::DOCUMENTS,
            Feature::CasSociaux => keys::CAS_SOCIAUX,
            Feature::Rapports => keys::RAPPORTS,
            Feature::Profil => keys::PROFIL,
        }
    }

    /// Route path of the feature's view
    pub fn route(&self) -> &'static str {
        match self {
            Feature::Dashboard => "/dashboard",
            Feature::Membres => "/membres",
            Feature::Contributions => "/contributions",
            Feature::Activites => "/activites",
            Feature::Presences => "/presences",
            Feature::Documents => "/documents",
            Feature::CasSociaux => "/cas-sociaux",
            Feature::Rapports => "/rapports",
            Feature::Profil => "/profil",
        }
    }

    /// Backend collection endpoint listing the feature's records
    pub fn endpoint(&self) -> &'static str {
        match self {
            Feature::Dashboard => "/dashboard/stats",
            Feature::Membres => "/members",
            Feature::Contributions => "/contributions",
            Feature::Activites => "/activities",
            Feature::Presences => "/attendance",
            Feature::Documents => "/documents",
            Feature::CasSociaux => "/social-cases",
            Feature::Rapports => "/reports",
            Feature::Profil => "/profile",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Dashboard => "Tableau de bord",
            Feature::Membres => "Membres",
            Feature::Contributions => "Cotisations",
            Feature::Activites => "Activités",
            Feature::Presences => "Présences",
            Feature::Documents => "Documents",
            Feature::CasSociaux => "Cas sociaux",
            Feature::Rapports => "Rapports",
            Feature::Profil => "Mon profil",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.permission_key())
    }
}

impl FromStr for Feature {
    type Err = String;

    /// Accepts a permission key (`cas_sociaux`) or a route (`/cas-sociaux`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Feature::ALL
            .into_iter()
            .find(|f| f.permission_key() == needle || f.route() == needle)
            .ok_or_else(|| format!("Unknown feature: {}", s))
    }
}
