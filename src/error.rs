//! Error types for the Shopify Prime SDK.
//!
//! This module contains error types used for configuration validation and
//! for the operations that are part of the public surface but not supported.
//!
//! HTTP-level errors live in [`crate::clients`] as [`crate::clients::HttpError`].
//!
//! # Example
//!
//! ```rust
//! use shopify_prime::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Shopify API key.")]
    EmptyApiKey,

    /// API secret key cannot be empty.
    #[error("API secret key cannot be empty. Please provide a valid Shopify API secret key.")]
    EmptyApiSecretKey,

    /// A scope string did not match any known scope.
    #[error("Unknown scope '{scope}'.")]
    UnknownScope {
        /// The scope string that was provided.
        scope: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Error returned by operations that are declared but not implemented.
///
/// Request, proxy and webhook authenticity checks are part of the public
/// surface so callers can depend on their signatures, but they always fail
/// with this error.
///
/// # Example
///
/// ```rust
/// use shopify_prime::auth::is_authentic_webhook;
///
/// let err = is_authentic_webhook().unwrap_err();
/// assert_eq!(err.operation, "is_authentic_webhook");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{operation} is not implemented")]
pub struct NotImplementedError {
    /// Name of the operation that was invoked.
    pub operation: &'static str,
}
