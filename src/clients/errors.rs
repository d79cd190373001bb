//! HTTP-specific error types for the Shopify Prime SDK.
//!
//! # Error Handling
//!
//! - [`ShopifyError`]: The platform answered with a status outside 200-299
//! - [`InvalidHttpMethodError`]: A method string could not be parsed
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! A request that reaches the platform and comes back with an error status is
//! a [`HttpError::Response`]. A request that never gets an answer (DNS, refused
//! connection, TLS) is a [`HttpError::Network`] and carries the transport's own
//! error untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_prime::clients::HttpError;
//!
//! match service.create_request(HttpMethod::Get, "products.json", Some("products"), None).await {
//!     Ok(products) => println!("Products: {products}"),
//!     Err(HttpError::Response(e)) => println!("Shopify said {}: {:?}", e.code, e.errors()),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use thiserror::Error;

use crate::clients::http_response::HttpResponse;

/// Key used for error messages that aren't attached to a specific field.
const GENERIC_ERROR_KEY: &str = "generic";

/// Error returned when Shopify answers with a non-2xx status code.
///
/// Carries the raw status, the response headers and the parsed JSON error
/// body exactly as Shopify sent it.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use shopify_prime::clients::ShopifyError;
///
/// let error = ShopifyError::new(404, HashMap::new(), serde_json::json!({"errors": "Not Found"}));
///
/// assert_eq!(error.code, 404);
/// assert_eq!(error.to_string(), "[404 Not Found] Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("[{code} {status_text}] {}", describe_errors(.body))]
pub struct ShopifyError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The canonical reason phrase for the status code.
    pub status_text: String,
    /// Response headers, keyed by lower-cased header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON error body.
    pub body: Value,
}

impl ShopifyError {
    /// Creates a new platform error from its parts.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let status_text = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();

        Self {
            code,
            status_text,
            headers,
            body,
        }
    }

    /// Builds a platform error from a raw response and its parsed body.
    #[must_use]
    pub fn from_response(response: &HttpResponse, body: Value) -> Self {
        Self::new(response.code, response.headers.clone(), body)
    }

    /// Returns the first value of a response header (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` Shopify attached to the failed request.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Normalizes the error body into a map of field name to messages.
    ///
    /// Shopify reports errors in several shapes:
    ///
    /// - `{"errors": "Not Found"}`
    /// - `{"errors": ["first", "second"]}`
    /// - `{"errors": {"title": ["can't be blank"]}}`
    /// - `{"error": "invalid_request", "error_description": "..."}` (OAuth)
    ///
    /// Messages that aren't tied to a field are collected under `"generic"`.
    #[must_use]
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        collect_errors(&self.body)
    }
}

fn collect_errors(body: &Value) -> BTreeMap<String, Vec<String>> {
    let mut errors = BTreeMap::new();

    match body.get("errors") {
        Some(Value::Object(fields)) => {
            for (field, messages) in fields {
                errors.insert(field.clone(), value_to_messages(messages));
            }
        }
        Some(other) => {
            errors.insert(GENERIC_ERROR_KEY.to_string(), value_to_messages(other));
        }
        None => {
            let message = body
                .get("error_description")
                .or_else(|| body.get("error"))
                .map(value_to_messages);
            if let Some(message) = message {
                errors.insert(GENERIC_ERROR_KEY.to_string(), message);
            }
        }
    }

    errors
}

fn value_to_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(value_to_message).collect(),
        other => vec![value_to_message(other)],
    }
}

fn value_to_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn describe_errors(body: &Value) -> String {
    let errors = collect_errors(body);
    if errors.is_empty() {
        return "No error details were returned.".to_string();
    }

    errors
        .iter()
        .flat_map(|(field, messages)| {
            messages.iter().map(move |message| {
                if field == GENERIC_ERROR_KEY {
                    message.clone()
                } else {
                    format!("{field}: {message}")
                }
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned when a string is not one of the supported HTTP methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid Http method {method}.")]
pub struct InvalidHttpMethodError {
    /// The invalid method that was provided.
    pub method: String,
}

/// Unified error type for all HTTP-related errors.
///
/// No variant is retried or recovered internally; every failure surfaces to
/// the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Shopify answered with a status outside 200-299.
    #[error(transparent)]
    Response(#[from] ShopifyError),

    /// Network or connection error reported by the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The shop domain could not be turned into a URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The URL string that failed to parse.
        url: String,
        /// The underlying parse error.
        source: url::ParseError,
    },

    /// A successful response carried a body that isn't valid JSON.
    #[error("Response with status {code} did not contain valid JSON: {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The request payload could not be serialized.
    #[error("Failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The unwrapped value did not match the requested type.
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<ShopifyError>();
};
