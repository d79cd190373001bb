//! Shop domain validation.

use crate::clients::{build_default_headers, build_url, HttpError, HttpRequest, ReqwestTransport, Transport};

/// Header Shopify sets on every response served for a real shop.
const SHOP_ID_HEADER: &str = "x-shopid";

/// Checks whether `domain` is served by Shopify.
///
/// Sends `HEAD https://<domain>/admin` without credentials and reports
/// whether the response carries an `X-ShopId` header. The status code is not
/// considered: a 404 with the header still counts, a 200 without it doesn't.
///
/// # Errors
///
/// - [`HttpError::InvalidUrl`] if the domain can't be parsed
/// - [`HttpError::Network`] if the domain doesn't answer at all
///
/// # Example
///
/// ```rust,ignore
/// use shopify_prime::auth::is_valid_shopify_domain;
///
/// if !is_valid_shopify_domain(&query.shop).await? {
///     return Err("Not a Shopify store");
/// }
/// ```
pub async fn is_valid_shopify_domain(domain: &str) -> Result<bool, HttpError> {
    is_valid_shopify_domain_with_transport(ReqwestTransport::new(), domain).await
}

/// Like [`is_valid_shopify_domain`], sending the request through `transport`.
///
/// # Errors
///
/// See [`is_valid_shopify_domain`].
pub async fn is_valid_shopify_domain_with_transport<T: Transport>(
    transport: T,
    domain: &str,
) -> Result<bool, HttpError> {
    let request = HttpRequest {
        method: reqwest::Method::HEAD,
        url: build_url(domain, &["admin"])?,
        headers: build_default_headers(),
        body: None,
    };

    tracing::debug!(url = %request.url, "Checking whether domain is a Shopify store");

    let response = transport.send(request).await?;
    let is_shopify = response.has_header(SHOP_ID_HEADER);

    tracing::debug!(domain, status = response.code, is_shopify, "Domain check finished");

    Ok(is_shopify)
}
