//! HTTP request types for the Shopify Prime SDK.
//!
//! This module provides [`HttpMethod`], the ordered [`Payload`] mapping used
//! for query strings and JSON bodies, and [`HttpRequest`], the fully-built
//! request handed to a [`Transport`](crate::clients::Transport).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use url::Url;

use crate::clients::errors::InvalidHttpMethodError;

/// HTTP methods supported by [`BaseService`](crate::clients::BaseService).
///
/// Parsing is case-insensitive; the method is always rendered upper-case.
///
/// # Example
///
/// ```rust
/// use shopify_prime::clients::HttpMethod;
///
/// let method: HttpMethod = "delete".parse().unwrap();
/// assert_eq!(method, HttpMethod::Delete);
/// assert_eq!(method.to_string(), "DELETE");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if a payload for this method goes into the query string.
    #[must_use]
    pub const fn sends_payload_as_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(InvalidHttpMethodError {
                method: s.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// An ordered mapping of field names to JSON values.
///
/// For GET and DELETE requests every field becomes a query parameter. For
/// POST and PUT requests the payload is serialized as a JSON object. In both
/// cases fields keep the order in which they were added.
///
/// # Example
///
/// ```rust
/// use shopify_prime::clients::Payload;
///
/// let payload = Payload::new()
///     .field("limit", 50)
///     .list("fields", ["id", "title"]);
///
/// assert_eq!(payload.to_query_pairs(), vec![
///     ("limit".to_string(), vec!["50".to_string()]),
///     ("fields".to_string(), vec!["id".to_string(), "title".to_string()]),
/// ]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    fields: Vec<(String, Value)>,
}

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any earlier value under the same name in place.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a list field. In a query string it is sent comma-joined.
    #[must_use]
    pub fn list<I, S>(self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        self.field(key, Value::Array(items))
    }

    /// Inserts a field, replacing any earlier value under the same name in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the payload has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Renders every field as query string values.
    ///
    /// Arrays yield one entry per element so the caller can comma-join the
    /// encoded elements; every other value yields a single entry. Strings
    /// are used raw, `null` becomes an empty value, and numbers, booleans
    /// and objects use their JSON text.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, Vec<String>)> {
        self.fields
            .iter()
            .map(|(key, value)| {
                let values = match value {
                    Value::Array(items) => items.iter().map(query_value).collect(),
                    other => vec![query_value(other)],
                };
                (key.clone(), values)
            })
            .collect()
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<serde_json::Map<String, Value>> for Payload {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().collect(),
        }
    }
}

impl TryFrom<Value> for Payload {
    type Error = Value;

    /// Converts a JSON object into a payload; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(other),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut payload = Self::new();
        for (key, value) in iter {
            payload.insert(key, value);
        }
        payload
    }
}

/// A fully-built request ready to be sent by a transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The wire method (includes HEAD for domain probing).
    pub method: reqwest::Method,
    /// The absolute request URL, query string included.
    pub url: Url,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// The serialized request body, if any.
    pub body: Option<String>,
}
