//! Facade-level billing types

use serde::{Deserialize, Serialize};

/// A line item for a hosted checkout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLineItem {
    /// Stripe price ID
    pub price: String,
    pub quantity: u64,
    /// When set, the hosted page lets the buyer adjust the quantity down
    /// to this minimum
    pub adjustable_minimum: Option<i64>,
}

/// A line item for a directly created subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionItem {
    /// Stripe price ID
    pub price: String,
    /// Zero for metered prices; usage is reported later
    pub quantity: u64,
}

/// Facade view of a Stripe subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: String,
    /// Stripe status label ("active", "past_due", ...)
    pub status: String,
    /// Unix timestamps, as Stripe reports them
    pub created: i64,
    pub current_period_start: i64,
    pub current_period_end: i64,
    pub cancel_at_period_end: bool,
    pub items: Vec<SubscriptionItemRecord>,
}

/// One item on a subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionItemRecord {
    pub price: Option<String>,
    pub quantity: Option<u64>,
}
