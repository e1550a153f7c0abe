//! Configuration loading and validation

#[cfg(test)]
mod tests {
    use ljmdi_portal::{Portal, PortalConfig, PortalError};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[tokio::test]
    async fn test_yaml_file_with_permission_override() {
        let dir = TempDir::new().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
api:
  base_url: "http://127.0.0.1:9/api"
session:
  storage_dir: "{}"
routes:
  landing_path: "/dashboard"
permissions:
  admin: [dashboard, rapports]
  membre: [profil]
"#,
            dir.path().display()
        )
        .unwrap();

        let config = PortalConfig::from_file(file.path()).await.unwrap();
        assert_eq!(config.routes.landing_path, "/dashboard");
        assert_eq!(config.session.storage_key, "ljmdi_session");

        let table = config.permission_table();
        assert!(table.allows("admin", "rapports"));
        assert!(!table.allows("admin", "membres"));
        assert!(!table.allows("membre", "contributions"));

        let portal = Portal::from_config(config).await.unwrap();
        assert!(!portal.auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: \"ftp://ljmdi.org\"").unwrap();

        let err = PortalConfig::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_config_error() {
        let err = PortalConfig::from_file("/nonexistent/ljmdi.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }
}
