//! Authenticated requests and session expiry

#[cfg(test)]
mod tests {
    use crate::common::StubBackend;
    use crate::common::assertions::SessionAssertions;
    use crate::common::fixtures::portal_config;
    use ljmdi_portal::{Feature, GuardDecision, Portal, PortalError};
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_expired_credential_ends_session_everywhere() {
        let backend = StubBackend::start().await;
        backend.accept_login("secretaire@ljmdi.org", "secretaire", "s1").await;
        backend
            .respond("/members", 401, json!({"message": "Token invalide"}))
            .await;
        let dir = TempDir::new().unwrap();

        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();
        portal
            .auth
            .login("secretaire@ljmdi.org", "pw")
            .await
            .unwrap();

        let err = portal
            .client
            .fetch_feature(Feature::Membres)
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::SessionExpired(_)));
        portal.auth.assert_logged_out();
        assert_eq!(
            portal.open("/membres"),
            GuardDecision::RedirectToLogin("/login".to_string())
        );

        let restarted = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();
        restarted.auth.assert_logged_out();
    }

    #[tokio::test]
    async fn test_fetch_feature_returns_records() {
        let backend = StubBackend::start().await;
        backend.accept_login("tresorier@ljmdi.org", "tresorier", "t1").await;
        backend
            .respond("/contributions", 200, json!([{"id": 1, "montant": 5000}]))
            .await;
        let dir = TempDir::new().unwrap();

        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();
        portal.auth.login("tresorier@ljmdi.org", "pw").await.unwrap();

        let records = portal
            .client
            .fetch_feature(Feature::Contributions)
            .await
            .unwrap();
        assert_eq!(records[0]["montant"], 5000);
    }

    #[tokio::test]
    async fn test_profile_refresh_persists_new_record() {
        let backend = StubBackend::start().await;
        backend.accept_login("membre@ljmdi.org", "membre", "m1").await;
        backend
            .respond(
                "/profile",
                200,
                json!({"user": {"role": "membre", "prenom": "Esther", "nom": "Ilunga"}}),
            )
            .await;
        let dir = TempDir::new().unwrap();

        {
            let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
                .await
                .unwrap();
            portal.auth.login("membre@ljmdi.org", "pw").await.unwrap();
            portal.client.fetch_profile().await.unwrap();
        }

        let restarted = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();
        let user = restarted.auth.current_user().unwrap();
        assert_eq!(user.display_name(), "Esther Ilunga");
        assert_eq!(restarted.auth.token().as_deref(), Some("m1"));
    }
}
