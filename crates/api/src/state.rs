//! Shared application state

use std::sync::Arc;

use turnpike_auth::AuthClient;
use turnpike_billing::{PaymentGateway, StripeGateway};

use crate::config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth: AuthClient,
    pub payments: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// Wire up the live collaborators from configuration
    pub fn new(config: Config) -> Self {
        let auth = AuthClient::new(config.auth_domain.clone());
        let payments: Arc<dyn PaymentGateway> = Arc::new(StripeGateway::new(
            &config.stripe_secret_key,
            config.redirect_url(),
        ));

        Self {
            config: Arc::new(config),
            auth,
            payments,
        }
    }
}
