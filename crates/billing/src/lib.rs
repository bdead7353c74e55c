// Test code patterns (expected in test files):
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Turnpike Billing
//!
//! Stripe integration behind a small facade: hosted checkout, the billing
//! portal, and subscription lookup and creation.
//!
//! ## Features
//!
//! - **Checkout**: Subscription-mode hosted checkout sessions
//! - **Portal**: Customer billing portal sessions
//! - **Subscriptions**: Latest-active lookup and direct creation
//!
//! Every operation goes through the [`PaymentGateway`] trait so the HTTP
//! layer can run against a stub in tests.

pub mod error;
pub mod gateway;
pub mod stripe_gateway;
pub mod types;

// Errors
pub use error::{BillingError, BillingResult};

// Gateway
pub use gateway::PaymentGateway;
pub use stripe_gateway::StripeGateway;

// Types
pub use types::{CheckoutLineItem, SubscriptionItem, SubscriptionItemRecord, SubscriptionRecord};
