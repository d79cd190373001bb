//! The request executor every Shopify resource call goes through.
//!
//! [`BaseService`] owns the shop domain, an optional access token and the
//! resource path (e.g. `admin/products`). [`BaseService::create_request`]
//! turns a method, sub-path, optional root element and optional payload into
//! exactly one HTTP exchange and unwraps the JSON answer.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::errors::{HttpError, ShopifyError};
use crate::clients::headers::{self, ACCESS_TOKEN_HEADER};
use crate::clients::http_request::{HttpMethod, HttpRequest, Payload};
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::clients::url_builder::{append_query, build_url};

/// Authenticated request executor for one shop and one resource path.
///
/// # Response Shape
///
/// No schema validation is performed. [`create_request`](Self::create_request)
/// returns whatever JSON Shopify sent (or the value under the root element).
/// [`create_request_as`](Self::create_request_as) is the opt-in typed layer.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_prime::clients::{BaseService, HttpMethod, Payload};
///
/// let service = BaseService::new("my-shop.myshopify.com", Some("access-token".into()), "admin");
///
/// let payload = Payload::new().list("fields", ["id", "title"]);
/// let products = service
///     .create_request(HttpMethod::Get, "products.json", Some("products"), Some(&payload))
///     .await?;
/// ```
#[derive(Debug)]
pub struct BaseService<T = ReqwestTransport> {
    shop_domain: String,
    access_token: Option<String>,
    resource: String,
    transport: T,
}

// Verify BaseService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BaseService>();
};

impl BaseService {
    /// Creates a service that sends requests with [`ReqwestTransport`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_prime::clients::BaseService;
    ///
    /// let service = BaseService::new("my-shop.myshopify.com", None, "admin/oauth");
    /// assert_eq!(service.resource(), "admin/oauth");
    /// assert!(service.access_token().is_none());
    /// ```
    #[must_use]
    pub fn new(
        shop_domain: impl Into<String>,
        access_token: Option<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self::with_transport(shop_domain, access_token, resource, ReqwestTransport::new())
    }

    /// Builds the headers every request starts from: `Accept` and `User-Agent`.
    #[must_use]
    pub fn build_default_headers() -> std::collections::HashMap<String, String> {
        headers::build_default_headers()
    }
}

impl<T: Transport> BaseService<T> {
    /// Creates a service that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(
        shop_domain: impl Into<String>,
        access_token: Option<String>,
        resource: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            shop_domain: shop_domain.into(),
            access_token: access_token.filter(|token| !token.is_empty()),
            resource: resource.into(),
            transport,
        }
    }

    /// Returns the shop domain requests are sent to.
    #[must_use]
    pub fn shop_domain(&self) -> &str {
        &self.shop_domain
    }

    /// Returns the access token, if one is set.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the resource path prefixed to every request path.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the transport requests are sent through.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces the shop domain and access token.
    ///
    /// Takes `&mut self`, so it can't run while a request on this service is
    /// still in flight.
    pub fn set_credentials(&mut self, shop_domain: impl Into<String>, access_token: impl Into<String>) {
        let access_token = access_token.into();
        self.shop_domain = shop_domain.into();
        self.access_token = Some(access_token).filter(|token| !token.is_empty());
    }

    /// Builds the request `create_request` would send, without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the shop domain is malformed.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<&Payload>,
    ) -> Result<HttpRequest, HttpError> {
        let mut url = build_url(&self.shop_domain, &[&self.resource, path])?;

        let mut headers = headers::build_default_headers();
        if let Some(token) = &self.access_token {
            headers.insert(ACCESS_TOKEN_HEADER.to_string(), token.clone());
        }

        let mut body = None;
        match payload {
            Some(payload) if method.sends_payload_as_query() => {
                append_query(&mut url, &payload.to_query_pairs());
            }
            Some(payload) => {
                body = Some(serde_json::to_string(payload).map_err(HttpError::Serialize)?);
                headers.insert("Content-Type".to_string(), "application/json".to_string());
            }
            None => {}
        }

        Ok(HttpRequest {
            method: method.into(),
            url,
            headers,
            body,
        })
    }

    /// Sends one request and unwraps the JSON response.
    ///
    /// - GET and DELETE payloads go into the query string, list values
    ///   comma-joined.
    /// - POST and PUT payloads are sent as a JSON body.
    /// - With `root_element`, the value under that key is returned; a missing
    ///   key yields [`Value::Null`]. Without it, the whole body is returned.
    ///
    /// `path` is joined to the resource with `/` and is always treated as a
    /// path: a `?` in it is percent-encoded. Query parameters must go through
    /// `payload`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Network`] if no response was received
    /// - [`HttpError::Response`] if the status is outside 200-299
    /// - [`HttpError::InvalidBody`] if a successful response isn't JSON
    /// - [`HttpError::InvalidUrl`] if the shop domain is malformed
    pub async fn create_request(
        &self,
        method: HttpMethod,
        path: &str,
        root_element: Option<&str>,
        payload: Option<&Payload>,
    ) -> Result<Value, HttpError> {
        let request = self.build_request(method, path, payload)?;
        tracing::debug!(method = %method, url = %request.url, "Sending request to Shopify");

        let response = self.transport.send(request).await?;

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}/{}, received reason: {}",
                self.resource,
                path,
                reason
            );
        }

        if !response.is_ok() {
            let error = ShopifyError::from_response(&response, response.error_json());
            tracing::warn!(code = error.code, method = %method, path, "Shopify returned an error response");
            return Err(HttpError::Response(error));
        }

        let json = response.json().map_err(|source| HttpError::InvalidBody {
            code: response.code,
            source,
        })?;

        Ok(match root_element {
            Some(root) => unwrap_root(json, root),
            None => json,
        })
    }

    /// Like [`create_request`](Self::create_request), deserializing the
    /// unwrapped value into `R`.
    ///
    /// # Errors
    ///
    /// Everything [`create_request`](Self::create_request) returns, plus
    /// [`HttpError::Deserialize`] if the value doesn't match `R`.
    pub async fn create_request_as<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        root_element: Option<&str>,
        payload: Option<&Payload>,
    ) -> Result<R, HttpError> {
        let value = self
            .create_request(method, path, root_element, payload)
            .await?;
        serde_json::from_value(value).map_err(HttpError::Deserialize)
    }
}

fn unwrap_root(json: Value, root: &str) -> Value {
    match json {
        Value::Object(mut map) => map.remove(root).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
