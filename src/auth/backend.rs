//! Login transport
//!
//! The auth service talks to the backend only through [`AuthBackend`], so tests
//! can swap in a stub and the HTTP details stay in one place.

use super::types::{Credentials, LoginResponse};
use crate::config::ApiConfig;
use crate::utils::error::{ErrorBody, PortalError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Backend operations the auth service depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Submit credentials; returns the decoded body of a successful response
    ///
    /// The body is returned as-is: checking that it carries both `user` and
    /// `token` is the caller's job.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;
}

/// `POST /login` over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    http_client: reqwest::Client,
    login_url: String,
}

impl HttpAuthBackend {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http_client = crate::client::build_http_client(config)?;
        Ok(Self::with_client(http_client, config))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(http_client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http_client,
            login_url: config.endpoint(&config.login_path),
        }
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        debug!("POST {} for {}", self.login_url, credentials.email);

        let response = self
            .http_client
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| PortalError::network(format!("Login request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PortalError::network(format!("Failed to read login response: {}", e)))?;

        if status.is_success() {
            return serde_json::from_str::<LoginResponse>(&body).map_err(|e| {
                PortalError::invalid_credentials_response(format!(
                    "Login response is not a valid JSON object: {}",
                    e
                ))
            });
        }

        let message = ErrorBody::message_from(&body);
        warn!("Login rejected with status {}: {}", status, message);

        match status {
            StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::UNPROCESSABLE_ENTITY => Err(PortalError::credentials_rejected(message)),
            // Unknown account when the backend says so, otherwise a wrong login URL
            StatusCode::NOT_FOUND => match ErrorBody::explicit_message(&body) {
                Some(message) => Err(PortalError::credentials_rejected(message)),
                None => Err(PortalError::api(status.as_u16(), message)),
            },
            _ => Err(PortalError::api(status.as_u16(), message)),
        }
    }
}
