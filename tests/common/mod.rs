//! Shared helpers for the integration tests.

use shopify_prime::clients::{HttpError, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use url::Url;
use wiremock::MockServer;

/// Shop domain every test request is addressed to.
pub const SHOP_DOMAIN: &str = "test-shop.myshopify.com";

/// Sends every request to the mock server instead of the shop.
///
/// Request URLs always use `https://<shop>`, which a local mock server can't
/// answer. This keeps the path and query and swaps the origin.
#[derive(Debug)]
pub struct RedirectTransport {
    inner: ReqwestTransport,
    base: Url,
}

impl RedirectTransport {
    pub fn new(server: &MockServer) -> Self {
        Self {
            inner: ReqwestTransport::new(),
            base: Url::parse(&server.uri()).expect("mock server uri is a valid url"),
        }
    }
}

impl Transport for RedirectTransport {
    async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut url = self.base.clone();
        url.set_path(request.url.path());
        url.set_query(request.url.query());
        request.url = url;

        self.inner.send(request).await
    }
}
