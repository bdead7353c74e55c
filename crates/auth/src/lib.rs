// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Turnpike Auth Client
//!
//! Client for the platform auth service. Resolves a raw `Authorization`
//! header value into the caller's user record and organization record,
//! including any linked billing identity. Non-200 responses from the auth
//! service are captured verbatim so the gateway can pass them through.

pub mod client;
pub mod error;
pub mod types;

pub use client::AuthClient;
pub use error::{AuthError, AuthResult};
pub use types::{AuthOrg, AuthUser};
