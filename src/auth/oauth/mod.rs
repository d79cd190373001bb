//! OAuth 2.0 authorization code flow for Shopify apps.
//!
//! 1. **Authorization URL** ([`build_authorization_url`]): send the merchant
//!    to Shopify's consent page, optionally with a [`StateParam`].
//! 2. **Code exchange** ([`authorize`]): when Shopify redirects back with a
//!    `code`, trade it for a permanent access token.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_prime::AuthScope;
//! use shopify_prime::auth::oauth::{authorize, build_authorization_url, StateParam};
//!
//! // Step 1: redirect the merchant
//! let state = StateParam::new();
//! let url = build_authorization_url(
//!     &[AuthScope::ReadProducts, AuthScope::WriteOrders],
//!     "example-shop.myshopify.com",
//!     "api-key",
//!     Some("https://myapp.example.com/auth/callback"),
//!     Some(state.as_ref()),
//! )?;
//! // Store `state` in the user's session, then redirect to `url`
//!
//! // Step 2: in the callback handler
//! if !state.verify(&query.state) {
//!     return Err(/* CSRF */);
//! }
//! let access_token = authorize(&query.code, &query.shop, "api-key", "secret-key").await?;
//! ```

mod authorization_url;
mod authorize;
mod state;

pub use authorization_url::build_authorization_url;
pub use authorize::{authorize, authorize_with_transport};
pub use state::StateParam;
