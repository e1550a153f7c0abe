//! Login and logout against the HTTP backend

#[cfg(test)]
mod tests {
    use crate::common::StubBackend;
    use crate::common::assertions::SessionAssertions;
    use crate::common::fixtures::portal_config;
    use ljmdi_portal::{Feature, Portal, PortalError};
    use serde_json::json;
    use tempfile::TempDir;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_admin_login_grants_every_permission() {
        let backend = StubBackend::start().await;
        backend.accept_login("admin@ljmdi.org", "admin", "abc").await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        let session = assert_ok!(portal.auth.login("admin@ljmdi.org", "pw").await);

        assert_eq!(session.token(), Some("abc"));
        portal.auth.assert_logged_in_as("admin");
        assert!(portal.auth.has_permission("rapports"));
        assert!(portal.auth.has_permission("cas_sociaux"));
        assert!(!portal.auth.is_loading());
    }

    #[tokio::test]
    async fn test_rejected_credentials_leave_session_empty() {
        let backend = StubBackend::start().await;
        backend.reject_logins("Mot de passe incorrect").await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        let err = portal
            .auth
            .login("membre@ljmdi.org", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::CredentialsRejected(_)));
        assert_eq!(err.user_message(), "Mot de passe incorrect");
        portal.auth.assert_logged_out();
    }

    #[tokio::test]
    async fn test_response_without_token_is_a_failure() {
        let backend = StubBackend::start().await;
        backend.login_without_token("membre").await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        let err = portal
            .auth
            .login("membre@ljmdi.org", "pw")
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::InvalidCredentialsResponse(_)));
        portal.auth.assert_logged_out();
    }

    #[tokio::test]
    async fn test_failed_login_replaces_previous_session() {
        let backend = StubBackend::start().await;
        backend
            .accept_login("tresorier@ljmdi.org", "tresorier", "t1")
            .await;
        backend.reject_logins("Compte inconnu").await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        assert_ok!(portal.auth.login("tresorier@ljmdi.org", "pw").await);
        portal.auth.assert_logged_in_as("tresorier");

        assert!(portal.auth.login("inconnu@ljmdi.org", "pw").await.is_err());
        portal.auth.assert_logged_out();
    }

    #[tokio::test]
    async fn test_null_role_logs_in_without_permissions() {
        let backend = StubBackend::start().await;
        backend
            .login_with_body(json!({
                "user": {"role": null, "email": "x@ljmdi.org"},
                "token": "abc",
            }))
            .await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        assert_ok!(portal.auth.login("x@ljmdi.org", "pw").await);

        assert!(portal.auth.is_authenticated());
        assert_eq!(portal.auth.session().role(), Some(""));
        for feature in Feature::ALL {
            assert!(!portal.auth.has_permission(feature.permission_key()));
        }
    }

    #[tokio::test]
    async fn test_blank_email_explains_itself() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        let err = portal.auth.login("  ", "pw").await.unwrap_err();

        assert!(matches!(err, PortalError::Validation(_)));
        assert_eq!(err.user_message(), "Email et mot de passe requis");
    }

    #[tokio::test]
    async fn test_wrong_login_path_is_not_a_wrong_password() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        // Nothing is mounted: every request gets an empty 404
        let err = portal
            .auth
            .login("admin@ljmdi.org", "pw")
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::Api { status: 404, .. }));
        assert_ne!(err.user_message(), "Email ou mot de passe incorrect");
        portal.auth.assert_logged_out();
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        let backend = StubBackend::start().await;
        let uri = backend.uri();
        drop(backend);
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&uri, dir.path()))
            .await
            .unwrap();

        let err = portal
            .auth
            .login("admin@ljmdi.org", "pw")
            .await
            .unwrap_err();

        assert!(err.is_network_error());
        portal.auth.assert_logged_out();
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let backend = StubBackend::start().await;
        backend.accept_login("secretaire@ljmdi.org", "secretaire", "s1").await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        assert_ok!(portal.auth.login("secretaire@ljmdi.org", "pw").await);
        portal.auth.logout().await;
        portal.auth.assert_logged_out();
        portal.auth.logout().await;
        portal.auth.assert_logged_out();
    }
}
