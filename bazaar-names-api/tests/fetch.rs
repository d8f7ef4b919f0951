//! Integration tests: fetch both endpoints from a local JSON server.

mod common;

use bazaar_names_api::{Endpoints, FetchError, HypixelClient, USER_AGENT};
use bazaar_names_catalog::CatalogEntry;
use common::json_server::{self, JsonServer, Route};

const BAZAAR_OK: &str = r#"{
    "success": true,
    "lastUpdated": 1700000000000,
    "products": {
        "ENCHANTED_IRON": { "product_id": "ENCHANTED_IRON" },
        "BOOSTER_COOKIE": { "product_id": "BOOSTER_COOKIE" }
    }
}"#;

const ITEMS_OK: &str = r#"{
    "success": true,
    "lastUpdated": 1700000000000,
    "items": [
        { "id": "BOOSTER_COOKIE", "name": "§6Booster Cookie", "tier": "LEGENDARY" }
    ]
}"#;

fn client_for(server: &JsonServer) -> HypixelClient {
    let endpoints = Endpoints {
        items_url: server.url("v2/resources/skyblock/items"),
        bazaar_url: server.url("v2/skyblock/bazaar"),
    };
    HypixelClient::new(endpoints, USER_AGENT).unwrap()
}

#[tokio::test]
async fn fetch_all_returns_both_payloads() {
    let server = json_server::start(vec![
        ("v2/skyblock/bazaar", Route::ok(BAZAAR_OK)),
        ("v2/resources/skyblock/items", Route::ok(ITEMS_OK)),
    ]);
    let client = client_for(&server);

    let (bazaar, items) = client.fetch_all().await.unwrap();
    assert_eq!(bazaar.product_ids, vec!["BOOSTER_COOKIE", "ENCHANTED_IRON"]);
    assert_eq!(bazaar.last_updated, Some(1700000000000));
    assert_eq!(
        items.items,
        vec![CatalogEntry::named("BOOSTER_COOKIE", "§6Booster Cookie")]
    );
}

#[tokio::test]
async fn requests_identify_the_client() {
    let server = json_server::start(vec![("v2/skyblock/bazaar", Route::ok(BAZAAR_OK))]);
    let client = client_for(&server);

    client.fetch_bazaar().await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let head = requests[0].to_ascii_lowercase();
    assert!(head.starts_with("get /v2/skyblock/bazaar "), "{head}");
    assert!(head.contains(&format!("user-agent: {USER_AGENT}")), "{head}");
}

#[tokio::test]
async fn non_success_status_is_a_request_error() {
    let server = json_server::start(vec![
        ("v2/skyblock/bazaar", Route::ok(BAZAAR_OK)),
        (
            "v2/resources/skyblock/items",
            Route::status(503, r#"{"success":false}"#),
        ),
    ]);
    let client = client_for(&server);

    let err = client.fetch_all().await.unwrap_err();
    match &err {
        FetchError::Request { status, reason, url } => {
            assert_eq!(*status, 503);
            assert_eq!(reason, "Service Unavailable");
            assert!(url.ends_with("/v2/resources/skyblock/items"), "{url}");
        }
        other => panic!("expected Request error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().starts_with("Request failed 503 Service Unavailable for http://"));
}

#[tokio::test]
async fn api_failure_carries_cause() {
    let server = json_server::start(vec![
        (
            "v2/skyblock/bazaar",
            Route::ok(r#"{"success":false,"cause":"Key throttle"}"#),
        ),
        ("v2/resources/skyblock/items", Route::ok(ITEMS_OK)),
    ]);
    let client = client_for(&server);

    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Bazaar API returned an error: Key throttle");
}

#[tokio::test]
async fn items_failure_reported_after_bazaar_succeeds() {
    let server = json_server::start(vec![
        ("v2/skyblock/bazaar", Route::ok(BAZAAR_OK)),
        ("v2/resources/skyblock/items", Route::ok(r#"{"success":true}"#)),
    ]);
    let client = client_for(&server);

    let err = client.fetch_all().await.unwrap_err();
    assert_eq!(err.to_string(), "Items API returned an error: Unknown API error");
}

#[tokio::test]
async fn invalid_json_body() {
    let server = json_server::start(vec![("v2/resources/skyblock/items", Route::ok("<html>"))]);
    let client = client_for(&server);

    let err = client.fetch_items().await.unwrap_err();
    assert!(matches!(err, FetchError::Json { .. }), "{err:?}");
}
