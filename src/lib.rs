//! # Shopify Prime
//!
//! A lightweight client for the Shopify REST and OAuth APIs.
//!
//! ## Overview
//!
//! This crate provides:
//! - A generic request executor, [`BaseService`], that every Shopify resource
//!   call goes through
//! - OAuth authorization URL generation and code exchange via [`auth::oauth`]
//! - Shop domain validation via [`is_valid_shopify_domain`]
//! - The [`AuthScope`] permissions an app can request
//! - Type-safe app configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_prime::{ApiKey, ApiSecretKey, AuthScope, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .scopes(AuthScope::parse_list("read_products,write_orders").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let url = config.authorization_url("example-shop.myshopify.com", None).unwrap();
//! assert!(url.starts_with("https://example-shop.myshopify.com/admin/oauth/authorize?"));
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use shopify_prime::{is_valid_shopify_domain, StateParam};
//!
//! // Step 1: Make sure the shop is real and send the merchant to Shopify
//! if !is_valid_shopify_domain(&shop).await? {
//!     return Err("Not a Shopify store");
//! }
//! let state = StateParam::new();
//! let url = config.authorization_url(&shop, Some(&state))?;
//! // Store `state` in the user's session, then redirect to `url`
//!
//! // Step 2: Handle the callback
//! if !state.verify(&query.state) {
//!     return Err("State mismatch");
//! }
//! let access_token = config.authorize(&query.code, &query.shop).await?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_prime::{BaseService, HttpMethod, Payload};
//!
//! let service = BaseService::new("my-store.myshopify.com", Some(access_token), "admin");
//!
//! let payload = Payload::new().field("limit", 5).list("fields", ["id", "title"]);
//! let products = service
//!     .create_request(HttpMethod::Get, "products.json", Some("products"), Some(&payload))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Credentials are held per [`BaseService`] instance
//! - **One exchange per call**: Nothing is retried, nothing is cached
//! - **Fail-fast validation**: Credential newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::AuthScope;
pub use config::{ApiKey, ApiSecretKey, ShopifyConfig, ShopifyConfigBuilder};
pub use error::{ConfigError, NotImplementedError};

// Re-export HTTP client types
pub use clients::{
    BaseService, HttpError, HttpMethod, HttpRequest, HttpResponse, Payload, ReqwestTransport,
    ShopifyError, Transport,
};

// Re-export auth helpers for convenience
pub use auth::oauth::{authorize, build_authorization_url, StateParam};
pub use auth::{
    is_authentic_proxy_request, is_authentic_request, is_authentic_webhook,
    is_valid_shopify_domain,
};
