//! Permission keys and role names known to the portal

pub const DASHBOARD: &str = "dashboard";
pub const MEMBRES: &str = "membres";
pub const CONTRIBUTIONS: &str = "contributions";
pub const ACTIVITES: &str = "activites";
pub const PRESENCES: &str = "presences";
pub const DOCUMENTS: &str = "documents";
pub const CAS_SOCIAUX: &str = "cas_sociaux";
pub const RAPPORTS: &str = "rapports";
pub const PROFIL: &str = "profil";

/// Every feature permission, in menu order
pub const ALL: &[&str] = &[
    DASHBOARD,
    MEMBRES,
    CONTRIBUTIONS,
    ACTIVITES,
    PRESENCES,
    DOCUMENTS,
    CAS_SOCIAUX,
    RAPPORTS,
    PROFIL,
];

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_TRESORIER: &str = "tresorier";
pub const ROLE_SECRETAIRE: &str = "secretaire";
pub const ROLE_CHARGE_DE_DISCIPLINE: &str = "charge_de_discipline";
pub const ROLE_MEMBRE: &str = "membre";
pub const ROLE_GUEST: &str = "guest";
