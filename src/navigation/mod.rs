//! Portal navigation
//!
//! The feature areas of the association portal, the menu each session sees,
//! and the mapping from route paths to the permission they require.

mod feature;
mod menu;
mod routes;

pub use feature::Feature;
pub use menu::{MenuEntry, menu_for};
pub use routes::{RouteAccess, RouteTable};
