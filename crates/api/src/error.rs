//! API error types and handling

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use turnpike_auth::AuthError;
use turnpike_billing::BillingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Auth collaborator rejections are forwarded verbatim
    #[error("Auth service returned status {status}")]
    Upstream { status: StatusCode, body: String },

    // Billing flow errors
    #[error("No billingId")]
    NoBillingId,
    #[error("No url")]
    NoSessionUrl,

    // Internal errors
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Forward the auth collaborator's status and body unchanged
            ApiError::Upstream { status, body } => (status, body),
            ApiError::NoBillingId => (
                StatusCode::NOT_FOUND,
                json!({
                    "message": "No billingId",
                    "help": "Try /checkout",
                })
                .to_string(),
            ),
            ApiError::NoSessionUrl => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "message": "No url" }).to_string(),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": message }).to_string(),
            ),
        };

        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Upstream { status, body } => ApiError::Upstream { status, body },
            AuthError::Request(err) => {
                tracing::error!("Auth request failed: {:?}", err);
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        tracing::error!("Billing error: {:?}", err);
        ApiError::Internal(err.to_string())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
