//! Stub backend built on wiremock

use super::fixtures::UserFactory;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A stub of the association's REST backend
pub struct StubBackend {
    pub server: MockServer,
}

impl StubBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Accept `email` at `POST /login` and answer with a `role` session
    pub async fn accept_login(&self, email: &str, role: &str, token: &str) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_partial_json(json!({ "email": email })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(UserFactory::login_body(role, token)),
            )
            .mount(&self.server)
            .await;
    }

    /// Reject every login with 401 and `message`
    pub async fn reject_logins(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": message })))
            .mount(&self.server)
            .await;
    }

    /// Answer every login with a 200 body lacking the token
    pub async fn login_without_token(&self, role: &str) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "user": UserFactory::record(role) })),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer every login with 200 and `body`
    pub async fn login_with_body(&self, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `GET path` with `status` and a JSON body
    pub async fn respond(&self, route: &str, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
