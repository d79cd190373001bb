//! State parameter handling for OAuth CSRF protection.
//!
//! Shopify echoes the `state` passed to the authorization URL back on the
//! callback. Generating a fresh [`StateParam`] per authorization request and
//! comparing it on the callback ties the two together.
//!
//! # Example
//!
//! ```rust
//! use shopify_prime::auth::oauth::StateParam;
//!
//! let state = StateParam::new();
//! assert_eq!(state.as_ref().len(), 15);
//!
//! // On the callback
//! assert!(state.verify(state.as_ref()));
//! assert!(!state.verify("forged"));
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;
use subtle::ConstantTimeEq;

/// OAuth state parameter for CSRF protection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam {
    value: String,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    /// The length of generated nonces.
    const NONCE_LENGTH: usize = 15;

    /// Creates a state parameter holding a random alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        let value: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();

        Self { value }
    }

    /// Wraps an existing state string, e.g. one restored from a session store.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { value: raw.into() }
    }

    /// Compares the state received on the callback in constant time.
    #[must_use]
    pub fn verify(&self, received: &str) -> bool {
        self.value.as_bytes().ct_eq(received.as_bytes()).into()
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
