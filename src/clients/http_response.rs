//! HTTP response types for the Shopify Prime SDK.
//!
//! [`HttpResponse`] is the raw answer a transport hands back: status code,
//! headers and the unparsed body text. Parsing and unwrapping happen in
//! [`BaseService`](crate::clients::BaseService).

use std::collections::HashMap;

use serde_json::Value;

/// A raw HTTP response returned by a transport.
///
/// Header names are stored lower-cased so lookups are case-insensitive.
///
/// # Example
///
/// ```rust
/// use shopify_prime::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, Default::default(), r#"{"shop":{}}"#)
///     .with_header("X-ShopId", "123");
///
/// assert!(response.is_ok());
/// assert_eq!(response.header("x-shopid"), Some("123"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw body text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, lower-casing the header names.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Adds a header value.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns `true` if the status code is within 200-299.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the header is present (case-insensitive).
    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_lowercase())
    }

    /// Returns the first value of a header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the deprecation reason if Shopify flagged the endpoint.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Parses the body of a successful response.
    ///
    /// An empty body is treated as an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        if self.body.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&self.body)
    }

    /// Parses the body of an error response.
    ///
    /// Error bodies are not always JSON; anything unparseable is kept as
    /// `{"raw_body": "<text>"}` so the caller still sees what came back.
    #[must_use]
    pub fn error_json(&self) -> Value {
        self.json()
            .unwrap_or_else(|_| serde_json::json!({ "raw_body": self.body }))
    }

    /// Converts reqwest headers into a lower-cased multi-value map.
    pub(crate) fn parse_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_boundaries() {
        assert!(!HttpResponse::new(199, HashMap::new(), "").is_ok());
        assert!(HttpResponse::new(200, HashMap::new(), "").is_ok());
        assert!(HttpResponse::new(299, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(300, HashMap::new(), "").is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), "").is_ok());
    }

    #[test]
    fn test_header_names_are_lower_cased() {
        let mut headers = HashMap::new();
        headers.insert("X-ShopId".to_string(), vec!["42".to_string()]);
        let response = HttpResponse::new(200, headers, "");

        assert!(response.has_header("x-shopid"));
        assert!(response.has_header("X-SHOPID"));
        assert_eq!(response.header("X-ShopId"), Some("42"));
    }

    #[test]
    fn test_empty_body_parses_as_empty_object() {
        let response = HttpResponse::new(200, HashMap::new(), "  ");
        assert_eq!(response.json().unwrap(), json!({}));
    }

    #[test]
    fn test_invalid_body_fails_json() {
        let response = HttpResponse::new(200, HashMap::new(), "<html>");
        assert!(response.json().is_err());
    }

    #[test]
    fn test_error_json_keeps_raw_body() {
        let response = HttpResponse::new(502, HashMap::new(), "Bad Gateway");
        assert_eq!(response.error_json(), json!({"raw_body": "Bad Gateway"}));
    }

    #[test]
    fn test_deprecation_reason() {
        let response = HttpResponse::new(200, HashMap::new(), "")
            .with_header("X-Shopify-API-Deprecated-Reason", "Use GraphQL");
        assert_eq!(response.deprecation_reason(), Some("Use GraphQL"));
    }

    #[test]
    fn test_parse_headers_collects_repeated_values() {
        let mut map = reqwest::header::HeaderMap::new();
        map.append("Set-Cookie", "a=1".parse().unwrap());
        map.append("Set-Cookie", "b=2".parse().unwrap());

        let parsed = HttpResponse::parse_headers(&map);
        assert_eq!(
            parsed.get("set-cookie"),
            Some(&vec!["a=1".to_string(), "b=2".to_string()])
        );
    }
}
