//! HTTP client for the auth service

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{AuthError, AuthResult};
use crate::types::{AuthOrg, AuthUser};

/// Client for the platform auth service
///
/// The `Authorization` value is forwarded verbatim (it may be empty); the
/// auth service alone decides whether the credential is valid.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for the auth service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Resolve the credential into the caller's user record
    pub async fn user(&self, authorization: &str) -> AuthResult<AuthUser> {
        let url = format!("{}/api/latest/user", self.base_url);
        self.fetch(&url, authorization).await
    }

    /// Fetch an organization record the caller is authorized to see
    pub async fn org(&self, authorization: &str, org_id: &str) -> AuthResult<AuthOrg> {
        let url = format!("{}/api/latest/org/{}", self.base_url, org_id);
        self.fetch(&url, authorization).await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str, authorization: &str) -> AuthResult<T> {
        let response = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(response.json::<T>().await?)
        } else {
            // Anything that is not exactly 200 becomes this gateway's
            // response, so keep the body intact.
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, %url, "auth service returned non-200");
            Err(AuthError::Upstream { status, body })
        }
    }
}
