//! Default request headers.

use std::collections::HashMap;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source repository from Cargo.toml, embedded in the User-Agent.
pub const SDK_REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

/// Header carrying the shop access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Returns the `User-Agent` value sent with every request.
///
/// # Example
///
/// ```rust
/// use shopify_prime::clients::{user_agent, SDK_VERSION};
///
/// assert!(user_agent().starts_with("Shopify Prime "));
/// assert!(user_agent().contains(SDK_VERSION));
/// ```
#[must_use]
pub fn user_agent() -> String {
    format!("Shopify Prime {SDK_VERSION} ({SDK_REPOSITORY})")
}

/// Builds the headers every request starts from: `Accept` and `User-Agent`.
///
/// No credentials are included; the access token is added per service.
#[must_use]
pub fn build_default_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers.insert("User-Agent".to_string(), user_agent());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_contain_accept_and_user_agent() {
        let headers = build_default_headers();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert!(headers.contains_key("User-Agent"));
    }

    #[test]
    fn test_user_agent_embeds_version_and_repository() {
        let agent = user_agent();
        assert!(agent.contains(SDK_VERSION));
        assert!(agent.ends_with(&format!("({SDK_REPOSITORY})")));
    }

    #[test]
    fn test_default_headers_never_carry_credentials() {
        let headers = build_default_headers();
        assert!(!headers.contains_key(ACCESS_TOKEN_HEADER));
        assert!(!headers.contains_key("Content-Type"));
    }
}
