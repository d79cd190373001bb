//! URL construction for Shopify requests.
//!
//! Every URL the SDK produces is HTTPS, whatever scheme the caller passed
//! with the shop domain, and its path never contains a run of slashes.

use url::Url;

use crate::clients::errors::HttpError;

/// Builds an HTTPS URL from a shop domain and path segments.
///
/// The domain may carry any scheme (or none); it is replaced with `https`.
/// Any path, query or fragment on the domain is discarded. The segments are
/// joined with `/` and duplicate slashes are collapsed.
///
/// # Errors
///
/// Returns [`HttpError::InvalidUrl`] if the domain can't be parsed as a host.
///
/// # Example
///
/// ```rust
/// use shopify_prime::clients::build_url;
///
/// let url = build_url("http://my-shop.myshopify.com", &["admin/", "/products.json"]).unwrap();
/// assert_eq!(url.as_str(), "https://my-shop.myshopify.com/admin/products.json");
/// ```
pub fn build_url(domain: &str, segments: &[&str]) -> Result<Url, HttpError> {
    let domain = domain.trim();
    let host = domain
        .split_once("://")
        .map_or(domain, |(_, rest)| rest);
    let candidate = format!("https://{host}");

    let mut url = Url::parse(&candidate).map_err(|source| HttpError::InvalidUrl {
        url: candidate.clone(),
        source,
    })?;

    url.set_path(&collapse_slashes(&segments.join("/")));
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Collapses every run of two or more `/` into a single `/`.
///
/// # Example
///
/// ```rust
/// use shopify_prime::clients::collapse_slashes;
///
/// assert_eq!(collapse_slashes("admin//oauth///authorize"), "admin/oauth/authorize");
/// ```
#[must_use]
pub fn collapse_slashes(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_slash = false;

    for c in path.chars() {
        if c == '/' {
            if previous_was_slash {
                continue;
            }
            previous_was_slash = true;
        } else {
            previous_was_slash = false;
        }
        collapsed.push(c);
    }

    collapsed
}

/// Appends query parameters to a URL.
///
/// Keys and values are percent-encoded. Multi-element values are encoded
/// element by element and joined with a literal `,`, the form Shopify expects
/// for list parameters (`fields=id,title`).
pub fn append_query(url: &mut Url, pairs: &[(String, Vec<String>)]) {
    if pairs.is_empty() {
        return;
    }

    let encoded = pairs
        .iter()
        .map(|(key, values)| {
            let value = values
                .iter()
                .map(|v| urlencoding::encode(v).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            format!("{}={}", urlencoding::encode(key), value)
        })
        .collect::<Vec<_>>()
        .join("&");

    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
        _ => encoded,
    };
    url.set_query(Some(&query));
}
