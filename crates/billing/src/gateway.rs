//! Payment gateway port

use async_trait::async_trait;

use crate::error::BillingResult;
use crate::types::{CheckoutLineItem, SubscriptionItem, SubscriptionRecord};

/// Payment operations the HTTP layer depends on.
///
/// Implementations are thin pass-throughs to the payment system. Failures
/// surface as [`BillingError`](crate::BillingError) values; the HTTP layer
/// alone decides how they map to responses.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a subscription-mode checkout session and returns its hosted
    /// URL. `billing_id` binds the session to an existing customer when the
    /// caller already has one. `None` means the payment system produced a
    /// session without a URL.
    async fn checkout(
        &self,
        items: Vec<CheckoutLineItem>,
        owner_reference: &str,
        billing_id: Option<&str>,
    ) -> BillingResult<Option<String>>;

    /// Creates a billing portal session for an existing customer.
    async fn portal(&self, billing_id: &str) -> BillingResult<Option<String>>;

    /// Returns the customer's latest active subscription, if any. Latest
    /// means the last active entry in the payment system's listing order.
    async fn subscriptions(&self, billing_id: &str) -> BillingResult<Option<SubscriptionRecord>>;

    /// Creates a subscription directly, without a hosted checkout step.
    async fn subscribe(
        &self,
        items: Vec<SubscriptionItem>,
        billing_id: &str,
    ) -> BillingResult<SubscriptionRecord>;
}
