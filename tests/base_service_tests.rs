//! Integration tests for the request executor.
//!
//! These tests run `BaseService` against a local mock server and cover query
//! and body encoding, root element unwrapping, and error surfacing.

mod common;

use common::{RedirectTransport, SHOP_DOMAIN};
use serde::Deserialize;
use serde_json::json;
use shopify_prime::clients::{user_agent, BaseService, HttpError, HttpMethod, Payload, ReqwestTransport};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer, token: Option<&str>, resource: &str) -> BaseService<RedirectTransport> {
    BaseService::with_transport(
        SHOP_DOMAIN,
        token.map(String::from),
        resource,
        RedirectTransport::new(server),
    )
}

// ============================================================================
// Successful Requests
// ============================================================================

#[tokio::test]
async fn test_get_sends_payload_as_query_and_unwraps_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products.json"))
        .and(query_param("fields", "id,title,handle"))
        .and(query_param("limit", "5"))
        .and(header("X-Shopify-Access-Token", "tok_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": 1, "title": "Shirt"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::new()
        .list("fields", ["id", "title", "handle"])
        .field("limit", 5);

    let products = service(&server, Some("tok_123"), "admin")
        .create_request(HttpMethod::Get, "products.json", Some("products"), Some(&payload))
        .await
        .unwrap();

    assert_eq!(products, json!([{"id": 1, "title": "Shirt"}]));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/products.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"product": {"title": "Hat"}})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"product": {"id": 7, "title": "Hat"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::new().field("product", json!({"title": "Hat"}));

    let product = service(&server, Some("tok"), "admin")
        .create_request(HttpMethod::Post, "products.json", Some("product"), Some(&payload))
        .await
        .unwrap();

    assert_eq!(product["id"], 7);
}

#[tokio::test]
async fn test_put_without_root_returns_whole_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/products/7.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"product": {"id": 7}, "extra": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = service(&server, Some("tok"), "admin/products")
        .create_request(HttpMethod::Put, "7.json", None, None)
        .await
        .unwrap();

    assert_eq!(body, json!({"product": {"id": 7}, "extra": true}));
}

#[tokio::test]
async fn test_delete_with_empty_body_returns_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/webhooks/9.json"))
        .and(query_param("reason", "cleanup"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::new().field("reason", "cleanup");

    let body = service(&server, Some("tok"), "admin/webhooks")
        .create_request(HttpMethod::Delete, "9.json", None, Some(&payload))
        .await
        .unwrap();

    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_missing_root_element_yields_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .mount(&server)
        .await;

    let value = service(&server, Some("tok"), "admin/orders")
        .create_request(HttpMethod::Get, "count.json", Some("orders"), None)
        .await
        .unwrap();

    assert!(value.is_null());
}

#[tokio::test]
async fn test_sends_default_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", user_agent().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    service(&server, None, "admin")
        .create_request(HttpMethod::Get, "shop.json", None, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deprecated_endpoint_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Shopify-API-Deprecated-Reason", "https://shopify.dev/changelog")
                .set_body_json(json!({"shop": {"id": 1}})),
        )
        .mount(&server)
        .await;

    let shop = service(&server, Some("tok"), "admin")
        .create_request(HttpMethod::Get, "shop.json", Some("shop"), None)
        .await
        .unwrap();

    assert_eq!(shop["id"], 1);
}

#[tokio::test]
async fn test_typed_request_deserializes_root() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Shop {
        id: u64,
        name: String,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/shop.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"shop": {"id": 42, "name": "Test Shop"}})),
        )
        .mount(&server)
        .await;

    let shop: Shop = service(&server, Some("tok"), "admin")
        .create_request_as(HttpMethod::Get, "shop.json", Some("shop"), None)
        .await
        .unwrap();

    assert_eq!(
        shop,
        Shop {
            id: 42,
            name: "Test Shop".to_string()
        }
    );
}

#[tokio::test]
async fn test_bare_json_path_is_its_own_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/products/.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&server)
        .await;

    let products = service(&server, Some("tok"), "admin/products")
        .create_request(HttpMethod::Get, ".json", Some("products"), None)
        .await
        .unwrap();

    assert_eq!(products, json!([]));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unprocessable_entity_surfaces_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("X-Request-Id", "req-1")
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::new().field("product", json!({"title": ""}));

    let result = service(&server, Some("tok"), "admin")
        .create_request(HttpMethod::Post, "products.json", Some("product"), Some(&payload))
        .await;

    let Err(HttpError::Response(error)) = result else {
        panic!("Expected platform error, got {result:?}");
    };

    assert_eq!(error.code, 422);
    assert_eq!(error.status_text, "Unprocessable Entity");
    assert_eq!(error.request_id(), Some("req-1"));
    assert_eq!(error.errors()["title"], vec!["can't be blank".to_string()]);
    assert!(error.to_string().contains("title: can't be blank"));
}

#[tokio::test]
async fn test_not_found_is_platform_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = service(&server, Some("tok"), "admin/products")
        .create_request(HttpMethod::Get, "999.json", Some("product"), None)
        .await;

    match result {
        Err(HttpError::Response(error)) => {
            assert_eq!(error.code, 404);
            assert_eq!(error.errors()["generic"], vec!["Not Found".to_string()]);
        }
        other => panic!("Expected platform error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let result = service(&server, Some("tok"), "admin")
        .create_request(HttpMethod::Get, "shop.json", None, None)
        .await;

    match result {
        Err(HttpError::Response(error)) => {
            assert_eq!(error.code, 503);
            assert_eq!(error.body, json!({"raw_body": "upstream unavailable"}));
        }
        other => panic!("Expected platform error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = service(&server, Some("tok"), "admin")
        .create_request(HttpMethod::Get, "shop.json", None, None)
        .await;

    assert!(matches!(result, Err(HttpError::InvalidBody { code: 200, .. })));
}

#[test]
fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1
    let service = BaseService::with_transport(
        "127.0.0.1:1",
        Some("tok".to_string()),
        "admin",
        ReqwestTransport::new(),
    );

    let result = tokio_test::block_on(service.create_request(HttpMethod::Get, "shop.json", None, None));

    assert!(matches!(result, Err(HttpError::Network(_))));
}
