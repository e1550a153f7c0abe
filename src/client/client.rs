//! Core portal client implementation

use crate::auth::AuthService;
use crate::config::ApiConfig;
use crate::navigation::Feature;
use crate::utils::error::{ErrorBody, PortalError, Result};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the association's REST backend
#[derive(Debug, Clone)]
pub struct PortalClient {
    pub(crate) config: ApiConfig,
    pub(crate) http_client: reqwest::Client,
    pub(crate) auth: Arc<AuthService>,
}

impl PortalClient {
    /// Create new portal client
    pub fn new(config: ApiConfig, auth: Arc<AuthService>) -> Result<Self> {
        let http_client = super::build_http_client(&config)?;
        Ok(Self::with_client(config, http_client, auth))
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(config: ApiConfig, http_client: reqwest::Client, auth: Arc<AuthService>) -> Self {
        info!("Portal client created for {}", config.base_url);
        Self {
            config,
            http_client,
            auth,
        }
    }

    pub fn auth(&self) -> &Arc<AuthService> {
        &self.auth
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send::<(), Value>(Method::DELETE, path, None)
            .await
            .map(|_| ())
    }

    /// List the records of a feature area
    ///
    /// The permission is checked locally first; a denied or logged-out caller
    /// never reaches the network.
    pub async fn fetch_feature(&self, feature: Feature) -> Result<Value> {
        if !self.auth.is_authenticated() {
            return Err(PortalError::unauthenticated(format!(
                "Login required to open {}",
                feature
            )));
        }
        if !self.auth.has_permission(feature.permission_key()) {
            return Err(PortalError::forbidden(format!(
                "Role lacks the {} permission",
                feature
            )));
        }

        self.get(feature.endpoint()).await
    }

    /// Send a request and decode the JSON response
    pub(crate) async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self.http_client.request(method.clone(), &url);
        let sent_token = self.auth.token();
        if let Some(token) = &sent_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        // Transport failures leave the session untouched
        let response = request
            .send()
            .await
            .map_err(|e| PortalError::network(format!("{} {} failed: {}", method, path, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PortalError::network(format!("Failed to read response: {}", e)))?;

        if status.is_success() {
            let text = if text.trim().is_empty() { "null" } else { text.as_str() };
            return serde_json::from_str(text).map_err(PortalError::from);
        }

        let message = ErrorBody::message_from(&text);
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("{} {} returned 401; session expired", method, path);
                match &sent_token {
                    Some(token) => self.auth.expire_credential(token).await,
                    None => self.auth.expire_session().await,
                }
                Err(PortalError::session_expired(message))
            }
            StatusCode::FORBIDDEN => Err(PortalError::forbidden(message)),
            _ => Err(PortalError::api(status.as_u16(), message)),
        }
    }
}
