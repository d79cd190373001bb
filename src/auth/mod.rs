//! Authentication helpers for Shopify apps.
//!
//! # Overview
//!
//! - [`AuthScope`]: The permissions an app can request
//! - [`oauth`]: Authorization URL generation and code exchange
//! - [`is_valid_shopify_domain`]: Checks whether a domain belongs to a Shopify store
//! - [`is_authentic_request`], [`is_authentic_proxy_request`],
//!   [`is_authentic_webhook`]: Declared signature checks, not implemented
//!
//! # OAuth Flow
//!
//! ```rust,ignore
//! use shopify_prime::AuthScope;
//! use shopify_prime::auth::{is_valid_shopify_domain, oauth};
//!
//! // 1. Make sure the shop is real, then send the merchant to the consent page
//! if is_valid_shopify_domain(&shop).await? {
//!     let url = oauth::build_authorization_url(
//!         &[AuthScope::ReadProducts],
//!         &shop,
//!         "api-key",
//!         Some("https://myapp.example.com/auth/callback"),
//!         None,
//!     )?;
//! }
//!
//! // 2. In the callback, exchange the code for a token
//! let token = oauth::authorize(&query.code, &query.shop, "api-key", "secret-key").await?;
//! ```

mod domain;
pub mod oauth;
mod scopes;
mod verification;

pub use domain::{is_valid_shopify_domain, is_valid_shopify_domain_with_transport};
pub use scopes::AuthScope;
pub use verification::{is_authentic_proxy_request, is_authentic_request, is_authentic_webhook};
