//! Access-token verification against the external identity provider.
//!
//! Accounts, passwords and sessions live with the provider; this service only
//! asks it who a bearer token belongs to.

use std::time::Duration;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The user a verified access token belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means the provider rejected the token.
    async fn verify(&self, access_token: &str) -> Result<Option<Identity>, AppError>;
}

/// Talks to a GoTrue-compatible `/auth/v1/user` endpoint.
pub struct HttpIdentityProvider {
    http: Client,
    base_url: String,
    service_key: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn verify(&self, access_token: &str) -> Result<Option<Identity>, AppError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Identity(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!("Identity provider rejected token ({status})");
            return Ok(None);
        }
        if !status.is_success() {
            warn!("Identity provider returned {status}");
            return Err(AppError::Identity(format!("unexpected status {status}")));
        }

        let identity = response
            .json::<Identity>()
            .await
            .map_err(|e| AppError::Identity(format!("invalid user payload: {e}")))?;
        Ok(Some(identity))
    }
}

/// Authenticated caller. Extracting it verifies the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;
        let identity = state
            .identity
            .verify(token)
            .await?
            .ok_or(AppError::Unauthorized)?;
        debug!(user_id = %identity.id, email = ?identity.email, "Authenticated request");

        Ok(AuthUser {
            user_id: identity.id,
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::Request, routing::get, Json, Router};
    use serde_json::json;

    const USER_ID: &str = "6f1c2d4e-8a9b-4c3d-9e2f-1a2b3c4d5e6f";

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_parsed() {
        assert_eq!(bearer_token(&parts_with(Some("Bearer abc"))), Some("abc"));
        assert_eq!(bearer_token(&parts_with(Some("bearer abc"))), Some("abc"));
    }

    #[test]
    fn test_bearer_token_rejects_other_shapes() {
        assert_eq!(bearer_token(&parts_with(None)), None);
        assert_eq!(bearer_token(&parts_with(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer "))), None);
        assert_eq!(bearer_token(&parts_with(Some("abc"))), None);
    }

    /// Minimal stand-in for the provider's user endpoint.
    async fn fake_user_endpoint(headers: HeaderMap) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
        let api_key = headers.get("apikey").and_then(|v| v.to_str().ok());
        let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        match (api_key, auth) {
            (Some("service-key"), Some("Bearer good-token")) => {
                Ok(Json(json!({ "id": USER_ID, "email": "jane@example.com" })))
            }
            (Some("service-key"), Some("Bearer broken-token")) => {
                Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => Err(axum::http::StatusCode::UNAUTHORIZED),
        }
    }

    async fn spawn_provider() -> String {
        let app = Router::new().route("/auth/v1/user", get(fake_user_endpoint));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_http_provider_accepts_valid_token() {
        let provider = HttpIdentityProvider::new(spawn_provider().await, "service-key");
        let identity = provider.verify("good-token").await.unwrap().unwrap();
        assert_eq!(identity.id, Uuid::parse_str(USER_ID).unwrap());
        assert_eq!(identity.email.as_deref(), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_http_provider_rejected_token_is_none() {
        let provider = HttpIdentityProvider::new(spawn_provider().await, "service-key");
        assert!(provider.verify("stale-token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_http_provider_server_error_is_identity_error() {
        let provider = HttpIdentityProvider::new(spawn_provider().await, "service-key");
        let err = provider.verify("broken-token").await.unwrap_err();
        assert!(matches!(err, AppError::Identity(_)));
    }
}
