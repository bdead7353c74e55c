//! Billing routes for Stripe integration
//!
//! Each handler resolves the caller's organization through the auth
//! service, then hands the real work to the payment facade.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use turnpike_auth::AuthOrg;
use turnpike_billing::{CheckoutLineItem, SubscriptionItem, SubscriptionRecord};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

/// Response carrying a hosted session URL
#[derive(Debug, Serialize)]
pub struct SessionUrl {
    pub url: String,
}

/// Query parameters for checkout
#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    /// Product selector; absent means the default per-seat plan
    pub product: Option<String>,
}

/// The raw `Authorization` header, empty when absent. The auth service is
/// the one that decides whether the credential is acceptable.
fn authorization(headers: &HeaderMap) -> &str {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

/// Resolve the caller's organization: user record first, then the org it
/// references. Non-200 auth responses bubble up as pass-through errors.
async fn resolve_org(state: &AppState, headers: &HeaderMap) -> Result<AuthOrg, ApiError> {
    let authorization = authorization(headers);
    let user = state.auth.user(authorization).await?;
    let org = state.auth.org(authorization, &user.org_id).await?;
    Ok(org)
}

/// Create a billing portal session for the caller's organization
pub async fn create_portal_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionUrl>> {
    let org = resolve_org(&state, &headers).await?;
    let billing_id = org.billing_id.ok_or(ApiError::NoBillingId)?;

    let url = state
        .payments
        .portal(&billing_id)
        .await?
        .ok_or(ApiError::NoSessionUrl)?;

    Ok(Json(SessionUrl { url }))
}

/// Get the organization's latest active subscription, `null` when none
pub async fn get_subscription(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Option<SubscriptionRecord>>> {
    let org = resolve_org(&state, &headers).await?;
    let billing_id = org.billing_id.ok_or(ApiError::NoBillingId)?;

    let subscription = state.payments.subscriptions(&billing_id).await?;

    Ok(Json(subscription))
}

/// Create a checkout session, or subscribe directly for the metered add-on
pub async fn create_checkout(
    State(state): State<AppState>,
    Query(query): Query<CheckoutQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let org = resolve_org(&state, &headers).await?;
    let catalog = &state.config.catalog;

    // The metered add-on has no hosted page; it is subscribed directly,
    // whether or not the org has a billing identity yet.
    if query.product.as_deref() == Some(catalog.metered_product.as_str()) {
        let items = vec![SubscriptionItem {
            price: catalog.metered_price.clone(),
            quantity: 0,
        }];
        let billing_id = org.billing_id.unwrap_or_default();
        state.payments.subscribe(items, &billing_id).await?;

        return Ok(StatusCode::CREATED.into_response());
    }

    let item = if query.product.as_deref() == Some(catalog.pro_product.as_str()) {
        CheckoutLineItem {
            price: catalog.pro_price.clone(),
            quantity: 1,
            adjustable_minimum: None,
        }
    } else {
        // Default plan: one seat, buyer can add more but never below one
        CheckoutLineItem {
            price: catalog.seat_price.clone(),
            quantity: 1,
            adjustable_minimum: Some(1),
        }
    };

    let url = state
        .payments
        .checkout(vec![item], &org.org_id, org.billing_id.as_deref())
        .await?
        .ok_or(ApiError::NoSessionUrl)?;

    Ok(Json(SessionUrl { url }).into_response())
}
