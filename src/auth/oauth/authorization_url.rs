//! OAuth authorization URL generation.
//!
//! [`build_authorization_url`] is the first step of the OAuth flow: it builds
//! the Shopify consent page URL the merchant is sent to. It performs no
//! network I/O.

use crate::auth::AuthScope;
use crate::clients::{append_query, build_url, HttpError};

/// Path of Shopify's OAuth consent page.
const AUTHORIZE_PATH: &str = "admin/oauth/authorize";

/// Builds the URL a merchant is sent to in order to install the app.
///
/// The query always carries `client_id` and the comma-joined `scope` list.
/// `redirect_url` and `state` are only added when provided.
///
/// # Arguments
///
/// * `scopes` - Permissions the app needs, joined in the given order
/// * `shop_domain` - The merchant's shop domain (scheme optional)
/// * `api_key` - The app's public API key, not the secret key
/// * `redirect_url` - Overrides the app's default redirect URL
/// * `state` - A unique value to check on the callback (see
///   [`StateParam`](crate::auth::oauth::StateParam))
///
/// # Errors
///
/// Returns [`HttpError::InvalidUrl`] if the shop domain can't be parsed.
///
/// # Example
///
/// ```rust
/// use shopify_prime::AuthScope;
/// use shopify_prime::auth::oauth::build_authorization_url;
///
/// let url = build_authorization_url(
///     &[AuthScope::ReadProducts, AuthScope::WriteOrders],
///     "shop.example.com",
///     "key123",
///     None,
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(
///     url,
///     "https://shop.example.com/admin/oauth/authorize?client_id=key123&scope=read_products,write_orders"
/// );
/// ```
pub fn build_authorization_url(
    scopes: &[AuthScope],
    shop_domain: &str,
    api_key: &str,
    redirect_url: Option<&str>,
    state: Option<&str>,
) -> Result<String, HttpError> {
    let mut url = build_url(shop_domain, &[AUTHORIZE_PATH])?;

    let mut params = vec![
        ("client_id".to_string(), vec![api_key.to_string()]),
        (
            "scope".to_string(),
            scopes.iter().map(ToString::to_string).collect(),
        ),
    ];

    if let Some(redirect_url) = redirect_url.filter(|value| !value.is_empty()) {
        params.push(("redirect_url".to_string(), vec![redirect_url.to_string()]));
    }

    if let Some(state) = state.filter(|value| !value.is_empty()) {
        params.push(("state".to_string(), vec![state.to_string()]));
    }

    append_query(&mut url, &params);

    Ok(url.to_string())
}
