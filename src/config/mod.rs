//! App configuration.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: App credentials plus the default scopes and redirect URL
//! - [`ShopifyConfigBuilder`]: A builder for constructing [`ShopifyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecretKey`]: A validated API secret key newtype with masked debug output
//!
//! The free functions in [`crate::auth::oauth`] take every value as an
//! argument. `ShopifyConfig` holds the values an app uses on every
//! installation so the OAuth steps only need the per-shop inputs.
//!
//! # Example
//!
//! ```rust
//! use shopify_prime::{ApiKey, ApiSecretKey, AuthScope, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("key123").unwrap())
//!     .api_secret_key(ApiSecretKey::new("secret").unwrap())
//!     .scopes(vec![AuthScope::ReadProducts, AuthScope::WriteOrders])
//!     .build()
//!     .unwrap();
//!
//! let url = config.authorization_url("shop.example.com", None).unwrap();
//! assert!(url.ends_with("client_id=key123&scope=read_products,write_orders"));
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecretKey};

use crate::auth::oauth::{self, StateParam};
use crate::auth::AuthScope;
use crate::clients::{HttpError, Transport};
use crate::error::ConfigError;

/// Configuration for a Shopify app.
///
/// # Thread Safety
///
/// `ShopifyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
    scopes: Vec<AuthScope>,
    redirect_url: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret key.
    #[must_use]
    pub const fn api_secret_key(&self) -> &ApiSecretKey {
        &self.api_secret_key
    }

    /// Returns the scopes requested during installation.
    #[must_use]
    pub fn scopes(&self) -> &[AuthScope] {
        &self.scopes
    }

    /// Returns the redirect URL, if configured.
    #[must_use]
    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    /// Builds the authorization URL for `shop_domain` from the configured
    /// key, scopes and redirect URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the shop domain can't be parsed.
    pub fn authorization_url(
        &self,
        shop_domain: &str,
        state: Option<&StateParam>,
    ) -> Result<String, HttpError> {
        oauth::build_authorization_url(
            &self.scopes,
            shop_domain,
            self.api_key.as_ref(),
            self.redirect_url.as_deref(),
            state.map(AsRef::as_ref),
        )
    }

    /// Exchanges an authorization code using the configured credentials.
    ///
    /// # Errors
    ///
    /// See [`oauth::authorize`].
    pub async fn authorize(&self, code: &str, shop_domain: &str) -> Result<String, HttpError> {
        oauth::authorize(
            code,
            shop_domain,
            self.api_key.as_ref(),
            self.api_secret_key.as_ref(),
        )
        .await
    }

    /// Like [`authorize`](Self::authorize), sending the request through `transport`.
    ///
    /// # Errors
    ///
    /// See [`oauth::authorize`].
    pub async fn authorize_with_transport<T: Transport>(
        &self,
        transport: T,
        code: &str,
        shop_domain: &str,
    ) -> Result<String, HttpError> {
        oauth::authorize_with_transport(
            transport,
            code,
            shop_domain,
            self.api_key.as_ref(),
            self.api_secret_key.as_ref(),
        )
        .await
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// Required fields are `api_key` and `api_secret_key`.
///
/// # Defaults
///
/// - `scopes`: Empty
/// - `redirect_url`: `None` (Shopify uses the app's default)
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    scopes: Vec<AuthScope>,
    redirect_url: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key (required).
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the scopes requested during installation.
    #[must_use]
    pub fn scopes(mut self, scopes: impl IntoIterator<Item = AuthScope>) -> Self {
        self.scopes = scopes.into_iter().collect();
        self
    }

    /// Sets the URL Shopify redirects to after the merchant accepts.
    #[must_use]
    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Builds the [`ShopifyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret_key` are not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret_key = self
            .api_secret_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret_key",
            })?;

        Ok(ShopifyConfig {
            api_key,
            api_secret_key,
            scopes: self.scopes,
            redirect_url: self.redirect_url.filter(|url| !url.is_empty()),
        })
    }
}
