//! Stripe-backed payment gateway

use async_trait::async_trait;
use stripe::{
    BillingPortalSession, CheckoutSession, CheckoutSessionMode, Client, CreateBillingPortalSession,
    CreateCheckoutSession, CreateCheckoutSessionAutomaticTax, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsAdjustableQuantity, CreateCheckoutSessionSubscriptionData,
    CreateSubscription, CreateSubscriptionItems, CustomerId, ListSubscriptions, Subscription,
    SubscriptionStatus, SubscriptionStatusFilter,
};

use crate::error::{BillingError, BillingResult};
use crate::gateway::PaymentGateway;
use crate::types::{
    CheckoutLineItem, SubscriptionItem, SubscriptionItemRecord, SubscriptionRecord,
};

/// Description attached to subscriptions created through checkout
const SUBSCRIPTION_DESCRIPTION: &str = "Turnpike Pro";

/// Stripe implementation of [`PaymentGateway`]
#[derive(Clone)]
pub struct StripeGateway {
    client: Client,
    redirect_url: String,
}

impl StripeGateway {
    /// `redirect_url` is where hosted checkout returns the buyer, on both
    /// the success and cancel paths.
    pub fn new(secret_key: &str, redirect_url: String) -> Self {
        Self {
            client: Client::new(secret_key),
            redirect_url,
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn checkout(
        &self,
        items: Vec<CheckoutLineItem>,
        owner_reference: &str,
        billing_id: Option<&str>,
    ) -> BillingResult<Option<String>> {
        let customer = billing_id
            .map(|id| id.parse::<CustomerId>())
            .transpose()
            .map_err(|e| BillingError::StripeApi(format!("Invalid customer ID: {}", e)))?;

        let line_items: Vec<CreateCheckoutSessionLineItems> =
            items.into_iter().map(line_item_params).collect();

        let params = CreateCheckoutSession {
            customer,
            mode: Some(CheckoutSessionMode::Subscription),
            line_items: Some(line_items),
            success_url: Some(&self.redirect_url),
            cancel_url: Some(&self.redirect_url),
            client_reference_id: Some(owner_reference),
            automatic_tax: Some(CreateCheckoutSessionAutomaticTax {
                enabled: true,
                ..Default::default()
            }),
            subscription_data: Some(CreateCheckoutSessionSubscriptionData {
                description: Some(SUBSCRIPTION_DESCRIPTION.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let session = CheckoutSession::create(&self.client, params).await?;

        tracing::info!(
            owner_reference = %owner_reference,
            session_id = %session.id,
            "Created checkout session"
        );

        Ok(session.url)
    }

    async fn portal(&self, billing_id: &str) -> BillingResult<Option<String>> {
        let customer_id = billing_id
            .parse::<CustomerId>()
            .map_err(|e| BillingError::StripeApi(format!("Invalid customer ID: {}", e)))?;

        let params = CreateBillingPortalSession::new(customer_id);
        let session = BillingPortalSession::create(&self.client, params).await?;

        tracing::info!(
            customer_id = %session.customer,
            "Created billing portal session"
        );

        Ok(Some(session.url))
    }

    async fn subscriptions(&self, billing_id: &str) -> BillingResult<Option<SubscriptionRecord>> {
        let customer_id = billing_id
            .parse::<CustomerId>()
            .map_err(|e| BillingError::StripeApi(format!("Invalid customer ID: {}", e)))?;

        let params = active_subscriptions_params(customer_id);
        let mut subscriptions = Subscription::list(&self.client, &params).await?;

        // Stripe filters to active; the caller wants the last entry in
        // listing order.
        Ok(subscriptions.data.pop().map(subscription_record))
    }

    async fn subscribe(
        &self,
        items: Vec<SubscriptionItem>,
        billing_id: &str,
    ) -> BillingResult<SubscriptionRecord> {
        let customer_id = billing_id
            .parse::<CustomerId>()
            .map_err(|e| BillingError::StripeApi(format!("Invalid customer ID: {}", e)))?;

        let mut params = CreateSubscription::new(customer_id);
        params.items = Some(
            items
                .into_iter()
                .map(|item| CreateSubscriptionItems {
                    price: Some(item.price),
                    quantity: Some(item.quantity),
                    ..Default::default()
                })
                .collect(),
        );

        let subscription = Subscription::create(&self.client, params).await?;

        tracing::info!(
            subscription_id = %subscription.id,
            "Created subscription"
        );

        Ok(subscription_record(subscription))
    }
}

fn active_subscriptions_params(customer_id: CustomerId) -> ListSubscriptions<'static> {
    ListSubscriptions {
        customer: Some(customer_id),
        status: Some(SubscriptionStatusFilter::Active),
        ..Default::default()
    }
}

fn line_item_params(item: CheckoutLineItem) -> CreateCheckoutSessionLineItems {
    let adjustable_quantity = item.adjustable_minimum.map(|minimum| {
        CreateCheckoutSessionLineItemsAdjustableQuantity {
            enabled: true,
            minimum: Some(minimum),
            ..Default::default()
        }
    });

    CreateCheckoutSessionLineItems {
        price: Some(item.price),
        quantity: Some(item.quantity),
        adjustable_quantity,
        ..Default::default()
    }
}

fn subscription_record(subscription: Subscription) -> SubscriptionRecord {
    let items = subscription
        .items
        .data
        .iter()
        .map(|item| SubscriptionItemRecord {
            price: item.price.as_ref().map(|price| price.id.to_string()),
            quantity: item.quantity,
        })
        .collect();

    SubscriptionRecord {
        id: subscription.id.to_string(),
        status: status_label(subscription.status).to_string(),
        created: subscription.created,
        current_period_start: subscription.current_period_start,
        current_period_end: subscription.current_period_end,
        cancel_at_period_end: subscription.cancel_at_period_end,
        items,
    }
}

fn status_label(status: SubscriptionStatus) -> &'static str {
    match status {
        SubscriptionStatus::Active => "active",
        SubscriptionStatus::PastDue => "past_due",
        SubscriptionStatus::Canceled => "canceled",
        SubscriptionStatus::Unpaid => "unpaid",
        SubscriptionStatus::Trialing => "trialing",
        SubscriptionStatus::Incomplete => "incomplete",
        SubscriptionStatus::IncompleteExpired => "incomplete_expired",
        SubscriptionStatus::Paused => "paused",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_stripe_wire_values() {
        assert_eq!(status_label(SubscriptionStatus::Active), "active");
        assert_eq!(status_label(SubscriptionStatus::PastDue), "past_due");
        assert_eq!(
            status_label(SubscriptionStatus::IncompleteExpired),
            "incomplete_expired"
        );
    }

    #[test]
    fn subscription_listing_asks_stripe_for_active_only() {
        let customer = "cus_123".parse::<CustomerId>().unwrap();

        let params = active_subscriptions_params(customer.clone());

        assert_eq!(params.customer, Some(customer));
        assert_eq!(params.status, Some(SubscriptionStatusFilter::Active));
    }

    #[test]
    fn fixed_quantity_line_item_has_no_adjustable_quantity() {
        let params = line_item_params(CheckoutLineItem {
            price: "price_pro".to_string(),
            quantity: 1,
            adjustable_minimum: None,
        });

        assert_eq!(params.price, Some("price_pro".to_string()));
        assert_eq!(params.quantity, Some(1));
        assert!(params.adjustable_quantity.is_none());
    }

    #[test]
    fn adjustable_line_item_carries_the_minimum() {
        let params = line_item_params(CheckoutLineItem {
            price: "price_seat".to_string(),
            quantity: 1,
            adjustable_minimum: Some(1),
        });

        let adjustable = params.adjustable_quantity.unwrap();
        assert!(adjustable.enabled);
        assert_eq!(adjustable.minimum, Some(1));
        assert_eq!(adjustable.maximum, None);
    }
}
