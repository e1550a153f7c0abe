//! Custom test assertions

use ljmdi_portal::{AuthService, SessionState};

/// Assertions over the live session of an auth service
pub trait SessionAssertions {
    fn assert_logged_out(&self);
    fn assert_logged_in_as(&self, role: &str);
}

impl SessionAssertions for AuthService {
    fn assert_logged_out(&self) {
        assert_eq!(self.state(), SessionState::Unauthenticated);
        assert!(self.token().is_none(), "Expected no bearer credential");
        assert!(self.current_user().is_none(), "Expected no user");
    }

    fn assert_logged_in_as(&self, role: &str) {
        assert_eq!(self.state(), SessionState::Authenticated);
        let user = self.current_user().expect("Expected a user");
        assert_eq!(user.role, role);
        assert!(self.token().is_some_and(|t| !t.is_empty()));
    }
}
