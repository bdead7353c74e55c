//! Application configuration

use std::env;

use axum::http::HeaderValue;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Front-end origin; CORS allow-origin and redirect base
    pub origin: String,
    pub billing_page: String,

    // Collaborators
    pub auth_domain: String,
    pub stripe_secret_key: String,

    // Product catalog
    pub catalog: ProductCatalog,
}

/// Stripe product and price identifiers the checkout dispatch works from
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    pub metered_product: String,
    pub metered_price: String,
    pub pro_product: String,
    pub pro_price: String,
    pub seat_price: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),

            origin: {
                let origin = env::var("ORIGIN").map_err(|_| ConfigError::Missing("ORIGIN"))?;
                // Used verbatim as the CORS allow-origin value
                if origin.parse::<HeaderValue>().is_err() {
                    return Err(ConfigError::InvalidOrigin(
                        "ORIGIN must be usable as an allow-origin header value",
                    ));
                }
                origin
            },
            billing_page: env::var("BILLING_PAGE")
                .map_err(|_| ConfigError::Missing("BILLING_PAGE"))?,

            // Collaborators
            auth_domain: env::var("L0_AUTH_DOMAIN")
                .map_err(|_| ConfigError::Missing("L0_AUTH_DOMAIN"))?,
            stripe_secret_key: env::var("STRIPE_SK")
                .map_err(|_| ConfigError::Missing("STRIPE_SK"))?,

            // Product catalog
            catalog: ProductCatalog {
                metered_product: env::var("STRIPE_PRODUCT_METERED")
                    .map_err(|_| ConfigError::Missing("STRIPE_PRODUCT_METERED"))?,
                metered_price: env::var("STRIPE_PRICE_METERED")
                    .map_err(|_| ConfigError::Missing("STRIPE_PRICE_METERED"))?,
                pro_product: env::var("STRIPE_PRODUCT_PRO")
                    .map_err(|_| ConfigError::Missing("STRIPE_PRODUCT_PRO"))?,
                pro_price: env::var("STRIPE_PRICE_PRO")
                    .map_err(|_| ConfigError::Missing("STRIPE_PRICE_PRO"))?,
                seat_price: env::var("STRIPE_PRICE_SEAT")
                    .map_err(|_| ConfigError::Missing("STRIPE_PRICE_SEAT"))?,
            },
        })
    }

    /// Where hosted checkout sends the buyer back, success and cancel alike
    pub fn redirect_url(&self) -> String {
        format!("{}/{}", self.origin, self.billing_page)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid origin: {0}")]
    InvalidOrigin(&'static str),
}
