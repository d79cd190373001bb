//! HTTP client types for Shopify API communication.
//!
//! This module provides the request executor and everything it is built
//! from.
//!
//! # Overview
//!
//! - [`BaseService`]: Authenticated request executor for one shop and resource path
//! - [`Payload`]: Ordered field mapping sent as a query string or JSON body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Transport`]: The single-exchange HTTP seam, with [`ReqwestTransport`] as default
//! - [`HttpResponse`]: The raw response a transport returns
//! - [`build_url`] / [`build_default_headers`]: URL and header construction
//! - [`HttpError`] / [`ShopifyError`]: Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_prime::clients::{BaseService, HttpMethod, Payload};
//!
//! let service = BaseService::new("my-shop.myshopify.com", Some(token), "admin");
//!
//! let payload = Payload::new().field("status", "any").list("fields", ["id", "name"]);
//! let orders = service
//!     .create_request(HttpMethod::Get, "orders.json", Some("orders"), Some(&payload))
//!     .await?;
//! ```
//!
//! # Failure Behavior
//!
//! Every call performs exactly one HTTP exchange. Nothing is retried and no
//! timeout is applied at this layer; configure timeouts on the
//! `reqwest::Client` given to [`ReqwestTransport::with_client`].

mod base_service;
mod errors;
mod headers;
mod http_request;
mod http_response;
#[cfg(test)]
pub(crate) mod mock;
mod transport;
mod url_builder;

pub use base_service::BaseService;
pub use errors::{HttpError, InvalidHttpMethodError, ShopifyError};
pub use headers::{build_default_headers, user_agent, ACCESS_TOKEN_HEADER, SDK_REPOSITORY, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, Payload};
pub use http_response::HttpResponse;
pub use transport::{ReqwestTransport, Transport};
pub use url_builder::{append_query, build_url, collapse_slashes};
