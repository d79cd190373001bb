//! The HTTP transport seam.
//!
//! [`BaseService`](crate::clients::BaseService) never talks to the network
//! directly. It hands a fully-built [`HttpRequest`] to a [`Transport`], which
//! performs exactly one exchange and returns the raw [`HttpResponse`].
//!
//! [`ReqwestTransport`] is the default implementation. Timeouts, proxies and
//! TLS settings belong to the `reqwest::Client` it wraps.

use std::future::Future;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Performs a single HTTP exchange.
///
/// Implementations must not retry and must not treat non-2xx statuses as
/// errors: a response that arrived is `Ok`, whatever its status. Only
/// failures to get a response at all are `Err`.
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

/// A [`Transport`] backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a rustls-backed client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Wraps an already configured client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.client.request(request.method, request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = HttpResponse::parse_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, headers, body))
    }
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).send(request)
    }
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::url_builder::build_url;

    #[tokio::test]
    async fn test_connection_failure_is_a_network_error() {
        let transport = ReqwestTransport::new();
        let request = HttpRequest {
            method: reqwest::Method::GET,
            url: build_url("127.0.0.1:1", &["admin"]).unwrap(),
            headers: crate::clients::headers::build_default_headers(),
            body: None,
        };

        let result = transport.send(request).await;
        assert!(matches!(result, Err(HttpError::Network(_))));
    }

    #[test]
    fn test_default_transport_builds() {
        let _ = ReqwestTransport::default();
    }
}
