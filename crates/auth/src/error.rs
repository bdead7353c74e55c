//! Auth client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for auth service lookups
#[derive(Debug, Error)]
pub enum AuthError {
    /// The auth service answered with a non-200 status. The response is
    /// preserved as-is so callers can return it to the client verbatim.
    #[error("Auth service returned status {status}")]
    Upstream { status: StatusCode, body: String },

    #[error("Auth service request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type for auth service lookups
pub type AuthResult<T> = Result<T, AuthError>;
