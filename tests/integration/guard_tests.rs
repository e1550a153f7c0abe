//! Route guard and menu against live sessions

#[cfg(test)]
mod tests {
    use crate::common::StubBackend;
    use crate::common::fixtures::portal_config;
    use ljmdi_portal::navigation::menu_for;
    use ljmdi_portal::{Feature, GuardDecision, Portal};
    use tempfile::TempDir;

    async fn logged_in(backend: &StubBackend, dir: &TempDir, role: &str) -> Portal {
        let email = format!("{}@ljmdi.org", role);
        backend.accept_login(&email, role, "tok").await;
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();
        portal.auth.login(&email, "pw").await.unwrap();
        portal
    }

    #[tokio::test]
    async fn test_membre_is_sent_back_from_rapports() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = logged_in(&backend, &dir, "membre").await;

        assert_eq!(
            portal.open("/rapports"),
            GuardDecision::RedirectToLanding("/".to_string())
        );
        assert_eq!(portal.open("/contributions"), GuardDecision::Render);
        assert_eq!(portal.open("/"), GuardDecision::Render);
    }

    #[tokio::test]
    async fn test_logged_out_visitor_is_sent_to_login() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = Portal::from_config(portal_config(&backend.uri(), dir.path()))
            .await
            .unwrap();

        for feature in Feature::ALL {
            assert_eq!(
                portal.open(feature.route()),
                GuardDecision::RedirectToLogin("/login".to_string())
            );
        }
        assert_eq!(portal.open("/login"), GuardDecision::Render);
    }

    #[tokio::test]
    async fn test_unknown_role_sees_nothing_gated() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = logged_in(&backend, &dir, "visiteur").await;

        assert!(portal.auth.is_authenticated());
        assert!(menu_for(&portal.auth).is_empty());
        assert_eq!(portal.open("/"), GuardDecision::Render);
        assert_eq!(
            portal.open("/profil"),
            GuardDecision::RedirectToLanding("/".to_string())
        );
    }

    #[tokio::test]
    async fn test_menu_follows_role() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = logged_in(&backend, &dir, "charge_de_discipline").await;

        let features: Vec<Feature> = menu_for(&portal.auth)
            .into_iter()
            .map(|entry| entry.feature)
            .collect();

        assert_eq!(
            features,
            vec![
                Feature::Activites,
                Feature::Presences,
                Feature::Documents,
                Feature::Profil
            ]
        );
    }

    #[tokio::test]
    async fn test_guard_after_logout_redirects_to_login() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = logged_in(&backend, &dir, "admin").await;

        assert_eq!(portal.open("/cas-sociaux"), GuardDecision::Render);
        portal.auth.logout().await;
        assert_eq!(
            portal.open("/cas-sociaux"),
            GuardDecision::RedirectToLogin("/login".to_string())
        );
    }

    #[tokio::test]
    async fn test_alternate_spellings_do_not_bypass_permissions() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = logged_in(&backend, &dir, "membre").await;

        let landing = GuardDecision::RedirectToLanding("/".to_string());
        for spelling in [
            "/rapports",
            "rapports",
            "//rapports",
            "/./rapports",
            "/Rapports",
            "/contributions/../rapports",
        ] {
            assert_eq!(portal.open(spelling), landing, "{}", spelling);
        }
    }

    #[tokio::test]
    async fn test_dot_segments_resolve_to_their_target() {
        let backend = StubBackend::start().await;
        let dir = TempDir::new().unwrap();
        let portal = logged_in(&backend, &dir, "membre").await;

        assert_eq!(
            portal.open("/rapports/../membres"),
            GuardDecision::RedirectToLanding("/".to_string())
        );
        assert_eq!(
            portal.open("/rapports/../contributions"),
            GuardDecision::Render
        );
    }
}
