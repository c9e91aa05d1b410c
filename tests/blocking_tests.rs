//! Integration tests for the blocking client.
//!
//! The mock server runs on its own multi-threaded runtime so that the
//! blocking client can drive its private runtime on the test thread.

use paddle_billing::blocking::Client;
use paddle_billing::entities::{CurrencyCode, Money, TaxCategory};
use paddle_billing::resources::{CreatePrice, CreateProduct, ListProducts, Pager};
use paddle_billing::{ApiKey, Error, HostUrl, PaddleConfig};
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let config = PaddleConfig::builder()
        .api_key(ApiKey::new("pdl_sdbx_apikey_01h7zcgmdc").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Client::new(&config).unwrap()
}

fn product(id: &str) -> Value {
    json!({
        "id": id,
        "name": "ChatApp Basic",
        "tax_category": "standard",
        "status": "active",
        "created_at": "2023-08-16T14:38:21.196Z",
        "updated_at": "2023-08-16T14:38:21.196Z"
    })
}

#[test]
fn test_blocking_create_product() {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/products"))
            .and(body_json(json!({"name": "ChatApp Basic", "tax_category": "standard"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": product("pro_01h7zcgmdc6tmwtjehp3sh7azf")
            })))
            .expect(1)
            .mount(&server),
    );

    let client = client_for(&server);
    let created = client
        .products()
        .create(CreateProduct::new("ChatApp Basic", TaxCategory::Standard))
        .unwrap();

    assert_eq!(created.id, "pro_01h7zcgmdc6tmwtjehp3sh7azf");
}

#[test]
fn test_blocking_pagination() {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    let next = format!("{}/products?after=pro_01", server.uri());
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(query_param("per_page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [product("pro_01")],
                "meta": {"pagination": {"per_page": 1, "next": next, "has_more": true}}
            })))
            .expect(1)
            .mount(&server),
    );
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(query_param("after", "pro_01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [product("pro_02")],
                "meta": {"pagination": {"per_page": 1, "next": null, "has_more": false}}
            })))
            .expect(1)
            .mount(&server),
    );

    let client = client_for(&server);
    let first = client
        .products()
        .list(Some(ListProducts {
            pager: Pager::new().per_page(1),
            ..ListProducts::default()
        }))
        .unwrap();

    let mut paginator = first.paginator().clone();
    let second = client.fetch_next(&mut paginator).unwrap().unwrap();
    assert_eq!(second[0].id, "pro_02");
    assert!(client.fetch_next(&mut paginator).unwrap().is_none());
}

#[test]
fn test_blocking_api_error() {
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(
        Mock::given(method("POST"))
            .and(path("/prices"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "type": "request_error",
                    "code": "bad_request",
                    "detail": "Invalid request",
                    "documentation_url": "https://developer.paddle.com/v1/errors/shared/bad_request",
                    "errors": [{"field": "product_id", "message": "Product not found"}]
                }
            })))
            .mount(&server),
    );

    let client = client_for(&server);
    let result = client.prices().create(CreatePrice::new(
        "pro_missing",
        "Monthly",
        Money::new("500", CurrencyCode::USD),
    ));

    match result {
        Err(Error::Api(error)) => {
            assert_eq!(error.field_errors[0].field, "product_id");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}
