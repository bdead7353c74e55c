//! API routes

pub mod billing;

use axum::{
    body::Body,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, Request, Response, StatusCode,
    },
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.origin);

    Router::new()
        .route("/api/latest/billing", get(billing::create_portal_session))
        .route(
            "/api/latest/billing/subscriptions",
            get(billing::get_subscription),
        )
        .route(
            "/api/latest/billing/checkout",
            get(billing::create_checkout),
        )
        .fallback(method_not_allowed)
        .layer(middleware::from_fn(require_get))
        .layer(TraceLayer::new_for_http())
        // Outermost, so OPTIONS preflights are answered before routing and
        // every response, errors included, carries the CORS headers
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured front-end origin.
///
/// Credentials require an exact origin list, never a wildcard.
fn build_cors_layer(origin: &str) -> CorsLayer {
    // Config validated the origin as a header value at load
    let allowed = origin.parse::<HeaderValue>().ok();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
}

/// Middleware that refuses every method but GET ahead of routing.
///
/// axum method routers answer HEAD from their GET handlers, so a per-route
/// refusal would still let a HEAD checkout create a real subscription.
/// OPTIONS never gets here; the CORS layer answers it first.
async fn require_get(request: Request<Body>, next: Next) -> Response<Body> {
    if request.method() != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    next.run(request).await
}

/// Paths outside the three billing routes are refused, not "not found";
/// the surface is fixed
async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
