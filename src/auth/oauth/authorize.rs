//! Authorization code exchange.
//!
//! After the merchant accepts the installation, Shopify redirects back with
//! a `code` query parameter. [`authorize`] trades that code for a permanent
//! access token.

use crate::clients::{BaseService, HttpError, HttpMethod, Payload, ReqwestTransport, Transport};

/// Resource path of the OAuth endpoints.
const OAUTH_RESOURCE: &str = "admin/oauth";

/// Exchanges an authorization code for an access token.
///
/// Sends `POST https://<shop>/admin/oauth/access_token` with
/// `{client_id, client_secret, code}` and returns the `access_token` field
/// of the response.
///
/// # Arguments
///
/// * `code` - The `code` query parameter Shopify sent to the callback
/// * `shop_domain` - The `shop` query parameter Shopify sent to the callback
/// * `api_key` - The app's public API key
/// * `secret_key` - The app's secret key
///
/// # Errors
///
/// - [`HttpError::Response`] if Shopify rejects the exchange
/// - [`HttpError::Network`] if Shopify can't be reached
/// - [`HttpError::Deserialize`] if the response carries no string `access_token`
///
/// A successful response without `access_token` is an error, never an empty
/// token.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_prime::auth::oauth::authorize;
///
/// let token = authorize(&query.code, &query.shop, "api-key", "secret-key").await?;
/// ```
pub async fn authorize(
    code: &str,
    shop_domain: &str,
    api_key: &str,
    secret_key: &str,
) -> Result<String, HttpError> {
    authorize_with_transport(ReqwestTransport::new(), code, shop_domain, api_key, secret_key).await
}

/// Like [`authorize`], sending the request through `transport`.
///
/// # Errors
///
/// See [`authorize`].
pub async fn authorize_with_transport<T: Transport>(
    transport: T,
    code: &str,
    shop_domain: &str,
    api_key: &str,
    secret_key: &str,
) -> Result<String, HttpError> {
    let service = BaseService::with_transport(shop_domain, None, OAUTH_RESOURCE, transport);

    let payload = Payload::new()
        .field("client_id", api_key)
        .field("client_secret", secret_key)
        .field("code", code);

    let token: String = service
        .create_request_as(
            HttpMethod::Post,
            "access_token",
            Some("access_token"),
            Some(&payload),
        )
        .await?;

    tracing::debug!(shop = shop_domain, "Exchanged authorization code for access token");

    Ok(token)
}
