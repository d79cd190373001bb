//! Request, proxy and webhook authenticity checks.
//!
//! These checks are declared so callers can wire them into their handlers,
//! but none is implemented yet. Each one returns [`NotImplementedError`]
//! every time and never reports `Ok(false)`, so a caller can't mistake an
//! unverified request for a rejected one.

use crate::error::NotImplementedError;

/// Checks whether a request's query string was signed by Shopify.
///
/// # Errors
///
/// Always returns [`NotImplementedError`].
pub const fn is_authentic_request() -> Result<bool, NotImplementedError> {
    Err(NotImplementedError {
        operation: "is_authentic_request",
    })
}

/// Checks whether an app proxy request was signed by Shopify.
///
/// # Errors
///
/// Always returns [`NotImplementedError`].
pub const fn is_authentic_proxy_request() -> Result<bool, NotImplementedError> {
    Err(NotImplementedError {
        operation: "is_authentic_proxy_request",
    })
}

/// Checks whether a webhook body was signed by Shopify.
///
/// # Errors
///
/// Always returns [`NotImplementedError`].
pub const fn is_authentic_webhook() -> Result<bool, NotImplementedError> {
    Err(NotImplementedError {
        operation: "is_authentic_webhook",
    })
}
