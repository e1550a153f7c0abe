//! Sidebar menu

use super::Feature;
use crate::auth::AuthService;
use serde::Serialize;

/// A visible menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub feature: Feature,
    pub label: &'static str,
    pub path: &'static str,
}

impl From<Feature> for MenuEntry {
    fn from(feature: Feature) -> Self {
        Self {
            feature,
            label: feature.label(),
            path: feature.route(),
        }
    }
}

/// Menu entries the current session may open, in menu order
pub fn menu_for(auth: &AuthService) -> Vec<MenuEntry> {
    Feature::ALL
        .into_iter()
        .filter(|f| auth.has_permission(f.permission_key()))
        .map(MenuEntry::from)
        .collect()
}
