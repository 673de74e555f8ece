/*
[INPUT]:  HTTP client, email/password credentials
[OUTPUT]: Saved session token and raw auth responses
[POS]:    Auth layer - orchestrates login, registration and logout
[UPDATE]: When auth endpoints or flow steps change
*/

use serde_json::Value;

use crate::http::{KantorClient, KantorError, RequestOptions, Result};
use crate::types::{LoginRequest, LoginResponse, RegisterRequest};

use super::guard::{Area, Redirect, redirect_for};
use super::store::token_preview;
use super::token::extract_session_token;

/// Optional personal details sent on registration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Manages the session lifecycle on top of [`KantorClient`]
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: KantorClient,
}

impl AuthManager {
    pub fn new(client: KantorClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &KantorClient {
        &self.client
    }

    /// Log in and save the issued session token
    ///
    /// POST /auth/login
    ///
    /// Fails with [`KantorError::MissingToken`] when the call succeeds but
    /// the payload carries no token; the stored token is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        tracing::info!(email, "logging in");
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let raw = self
            .client
            .request_value("/auth/login", RequestOptions::post(&body)?)
            .await?;

        let token = extract_session_token(&raw).ok_or_else(|| {
            tracing::warn!(email, "login response carried no token");
            KantorError::MissingToken
        })?;
        tracing::debug!(token = %token_preview(&token), "login token parsed");

        self.client.credential_store().save(&token).await?;
        Ok(LoginResponse { token, raw })
    }

    /// Create an account; does not sign in
    ///
    /// POST /auth/register
    pub async fn register(&self, email: &str, password: &str, profile: Profile) -> Result<Value> {
        tracing::info!(email, "registering");
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: profile.first_name,
            last_name: profile.last_name,
        };

        self.client
            .request_value("/auth/register", RequestOptions::post(&body)?)
            .await
    }

    /// Forget the session locally; no server call
    pub async fn logout(&self) -> Result<()> {
        tracing::info!("logging out");
        self.client.credential_store().clear().await
    }

    /// Whether a session token is currently stored
    pub async fn is_authenticated(&self) -> Result<bool> {
        let token = self.client.credential_store().load().await?;
        Ok(token.is_some_and(|t| !t.is_empty()))
    }

    /// Re-read the session and decide the redirect for entering `area`
    pub async fn guard(&self, area: Area) -> Result<Option<Redirect>> {
        let authenticated = self.is_authenticated().await?;
        Ok(redirect_for(authenticated, area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::auth::{CredentialStore, MemoryCredentialStore};
    use crate::http::ClientConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn manager_for(server: &MockServer, store: Arc<MemoryCredentialStore>) -> AuthManager {
        let client = KantorClient::with_config(ClientConfig::with_base_url(server.uri()), store)
            .expect("client init");
        AuthManager::new(client)
    }

    #[tokio::test]
    async fn test_login_saves_nested_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "jan@kantor.pl",
                "password": "secret1",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": {"token": "nested-token"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let auth_manager = manager_for(&server, store.clone());

        let login = auth_manager
            .login("jan@kantor.pl", "secret1")
            .await
            .unwrap();

        assert_eq!(login.token, "nested-token");
        assert_eq!(store.load().await.unwrap(), Some("nested-token".to_string()));
        assert!(auth_manager.is_authenticated().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_failure_keeps_previous_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Invalid credentials",
                "error": "Unauthorized",
                "statusCode": 401
            })))
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::with_token("old"));
        let auth_manager = manager_for(&server, store.clone());

        let err = auth_manager.login("jan@kantor.pl", "wrong").await.unwrap_err();

        assert!(err.is_auth_error());
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(store.load().await.unwrap(), Some("old".to_string()));
    }

    #[tokio::test]
    async fn test_register_sends_profile_and_leaves_store_alone() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(serde_json::json!({
                "email": "anna@kantor.pl",
                "password": "secret1",
                "firstName": "Anna",
                "lastName": "Nowak",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 1, "email": "anna@kantor.pl", "token": "should-not-be-saved"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let auth_manager = manager_for(&server, store.clone());

        let profile = Profile {
            first_name: Some("Anna".to_string()),
            last_name: Some("Nowak".to_string()),
        };
        let response = auth_manager
            .register("anna@kantor.pl", "secret1", profile)
            .await
            .unwrap();

        assert_eq!(response["email"], "anna@kantor.pl");
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_and_guard() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryCredentialStore::with_token("tok"));
        let auth_manager = manager_for(&server, store);

        assert_eq!(auth_manager.guard(Area::Public).await.unwrap(), Some(Redirect::ToHome));
        assert_eq!(auth_manager.guard(Area::Protected).await.unwrap(), None);

        auth_manager.logout().await.unwrap();
        auth_manager.logout().await.unwrap();

        assert!(!auth_manager.is_authenticated().await.unwrap());
        assert_eq!(
            auth_manager.guard(Area::Protected).await.unwrap(),
            Some(Redirect::ToLogin)
        );
    }
}
