//! OAuth scope handling for Shopify API.
//!
//! This module provides the [`AuthScope`] type, the closed set of permissions
//! an app can request during authorization.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A permission requested during OAuth authorization.
///
/// Scopes render as their snake_case wire name and are comma-joined in the
/// authorization URL.
///
/// # Example
///
/// ```rust
/// use shopify_prime::AuthScope;
///
/// let scope: AuthScope = "write_orders".parse().unwrap();
/// assert_eq!(scope, AuthScope::WriteOrders);
/// assert_eq!(scope.to_string(), "write_orders");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthScope {
    /// `read_content`
    ReadContent,
    /// `write_content`
    WriteContent,
    /// `read_themes`
    ReadThemes,
    /// `write_themes`
    WriteThemes,
    /// `read_products`
    ReadProducts,
    /// `write_products`
    WriteProducts,
    /// `read_customers`
    ReadCustomers,
    /// `write_customers`
    WriteCustomers,
    /// `read_orders`
    ReadOrders,
    /// `write_orders`
    WriteOrders,
    /// `read_script_tags`
    ReadScriptTags,
    /// `write_script_tags`
    WriteScriptTags,
    /// `read_fulfillments`
    ReadFulfillments,
    /// `write_fulfillments`
    WriteFulfillments,
    /// `read_shipping`
    ReadShipping,
    /// `write_shipping`
    WriteShipping,
}

impl AuthScope {
    /// Every scope, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::ReadContent,
        Self::WriteContent,
        Self::ReadThemes,
        Self::WriteThemes,
        Self::ReadProducts,
        Self::WriteProducts,
        Self::ReadCustomers,
        Self::WriteCustomers,
        Self::ReadOrders,
        Self::WriteOrders,
        Self::ReadScriptTags,
        Self::WriteScriptTags,
        Self::ReadFulfillments,
        Self::WriteFulfillments,
        Self::ReadShipping,
        Self::WriteShipping,
    ];

    /// Returns the wire name of the scope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadContent => "read_content",
            Self::WriteContent => "write_content",
            Self::ReadThemes => "read_themes",
            Self::WriteThemes => "write_themes",
            Self::ReadProducts => "read_products",
            Self::WriteProducts => "write_products",
            Self::ReadCustomers => "read_customers",
            Self::WriteCustomers => "write_customers",
            Self::ReadOrders => "read_orders",
            Self::WriteOrders => "write_orders",
            Self::ReadScriptTags => "read_script_tags",
            Self::WriteScriptTags => "write_script_tags",
            Self::ReadFulfillments => "read_fulfillments",
            Self::WriteFulfillments => "write_fulfillments",
            Self::ReadShipping => "read_shipping",
            Self::WriteShipping => "write_shipping",
        }
    }

    /// Parses a comma-separated scope list such as `"read_products, write_orders"`.
    ///
    /// Order is kept and empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownScope`] for the first unrecognized entry.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, ConfigError> {
        s.split(',')
            .map(str::trim)
            .filter(|scope| !scope.is_empty())
            .map(str::parse::<Self>)
            .collect()
    }

    /// Joins scopes with `,` in the order given.
    #[must_use]
    pub fn join(scopes: &[Self]) -> String {
        scopes
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for AuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == trimmed)
            .ok_or_else(|| ConfigError::UnknownScope {
                scope: trimmed.to_string(),
            })
    }
}

impl Serialize for AuthScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuthScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scope_round_trips_through_its_name() {
        for scope in AuthScope::ALL {
            assert_eq!(scope.as_str().parse::<AuthScope>().unwrap(), scope);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_scope() {
        let result = "read_everything".parse::<AuthScope>();
        assert!(matches!(
            result,
            Err(ConfigError::UnknownScope { scope }) if scope == "read_everything"
        ));
    }

    #[test]
    fn test_parse_list_keeps_order_and_skips_blanks() {
        let scopes = AuthScope::parse_list("write_orders, read_products,,").unwrap();
        assert_eq!(scopes, vec![AuthScope::WriteOrders, AuthScope::ReadProducts]);
    }

    #[test]
    fn test_join_keeps_order() {
        let joined = AuthScope::join(&[AuthScope::ReadProducts, AuthScope::WriteOrders]);
        assert_eq!(joined, "read_products,write_orders");
        assert_eq!(AuthScope::join(&[]), "");
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&vec![AuthScope::ReadScriptTags]).unwrap();
        assert_eq!(json, r#"["read_script_tags"]"#);

        let parsed: Vec<AuthScope> = serde_json::from_str(r#"["write_shipping"]"#).unwrap();
        assert_eq!(parsed, vec![AuthScope::WriteShipping]);

        let invalid: Result<AuthScope, _> = serde_json::from_str(r#""read_nothing""#);
        assert!(invalid.is_err());
    }
}
