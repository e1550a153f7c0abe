//! Permission checking methods

use super::system::PermissionTable;

impl PermissionTable {
    /// Check whether `role` grants `key`
    pub fn allows(&self, role: &str, key: &str) -> bool {
        self.permissions_for(role).contains(key)
    }

    /// Check whether `role` grants every key in `keys`
    pub fn allows_all(&self, role: &str, keys: &[&str]) -> bool {
        let granted = self.permissions_for(role);
        keys.iter().all(|k| granted.contains(*k))
    }

    /// Check whether `role` grants at least one key in `keys`
    pub fn allows_any(&self, role: &str, keys: &[&str]) -> bool {
        let granted = self.permissions_for(role);
        keys.iter().any(|k| granted.contains(*k))
    }

    /// Sorted permission keys of `role`, for display
    pub fn sorted_permissions(&self, role: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .permissions_for(role)
            .iter()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}
