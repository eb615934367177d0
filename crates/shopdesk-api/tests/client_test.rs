#![allow(clippy::unwrap_used)]
// Integration tests for `AdminClient` using wiremock.

use std::time::Duration;

use pretty_assertions::{assert_eq, assert_ne};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdesk_api::{AdminClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let client = AdminClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Item {
    id: u64,
    name: String,
}

// ── List envelope ───────────────────────────────────────────────────

#[tokio::test]
async fn list_unwraps_plural_envelope_and_count() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 1, "name": "acme"}, {"id": 2, "name": "zenith"}],
            "count": 42
        })))
        .mount(&server)
        .await;

    let page = client
        .get_list::<Item>("/brands", &[], "brands")
        .await
        .unwrap();

    assert_eq!(page.count, 42);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "acme");
}

#[tokio::test]
async fn list_defaults_missing_fields() {
    let (server, client) = setup().await;

    // No `brands` array, no `count` — both must default, not error.
    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let page = client
        .get_list::<Item>("/brands", &[], "brands")
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.count, -1);
}

#[tokio::test]
async fn list_appends_cache_defeating_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"brands": []})))
        .mount(&server)
        .await;

    client
        .get_list::<Item>(
            "/brands",
            &[("limit".to_string(), "10".to_string())],
            "brands",
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert!(query.contains("limit=10"), "query was: {query}");
    assert!(query.contains("t="), "expected nonce param, query was: {query}");
}

// ── Detail envelope ─────────────────────────────────────────────────

#[tokio::test]
async fn detail_unwraps_data_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/brands/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 1, "name": "acme"}})),
        )
        .mount(&server)
        .await;

    let item: Item = client.get_data("/brands/1").await.unwrap();
    assert_eq!(
        item,
        Item {
            id: 1,
            name: "acme".into()
        }
    );
}

// ── Error normalization ─────────────────────────────────────────────

#[tokio::test]
async fn structured_error_propagates_verbatim() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "keyword is too long",
            "code": "validate-fail"
        })))
        .mount(&server)
        .await;

    let err = client
        .get_list::<Item>("/brands", &[], "brands")
        .await
        .unwrap_err();

    match err {
        Error::Api {
            message,
            code,
            status,
        } => {
            assert_eq!(message, "keyword is too long");
            assert_eq!(code.as_deref(), Some("validate-fail"));
            assert_eq!(status, 400);
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn unstructured_error_becomes_unknown() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client
        .get_list::<Item>("/brands", &[], "brands")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "unknown error[502]");
    assert!(err.code().is_none());
}

#[tokio::test]
async fn slow_response_normalizes_to_timeout() {
    let server = MockServer::start().await;
    let transport = TransportConfig {
        timeout: Duration::from_millis(100),
        ..TransportConfig::default()
    };
    let client = AdminClient::new(&server.uri(), &transport).unwrap();

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"brands": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client
        .get_list::<Item>("/brands", &[], "brands")
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected Timeout, got: {err:?}");
    assert_eq!(err.message(), "request timed out, please retry");
}

// ── Reference datasets ──────────────────────────────────────────────

#[tokio::test]
async fn reference_extracts_keyed_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/commons/statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statuses": [{"id": 1, "name": "enabled"}]
        })))
        .mount(&server)
        .await;

    let statuses: Vec<Item> = client
        .get_reference("/commons/statuses", "statuses")
        .await
        .unwrap();
    assert_eq!(statuses.len(), 1);
}

// ── Auth flow ───────────────────────────────────────────────────────

#[tokio::test]
async fn login_posts_salted_digest() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/me/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abcd1234"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/users/me/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": "admin",
            "roles": ["su"]
        })))
        .mount(&server)
        .await;

    let password = secrecy::SecretString::from("secret".to_string());
    let user = client.login("admin", &password).await.unwrap();

    assert_eq!(user.account, "admin");
    assert!(user.signed_in());

    // The posted password must be sha256(sha256(raw) + token), never the raw value.
    let requests = server.received_requests().await.unwrap();
    let login_post = requests
        .iter()
        .find(|r| r.method == wiremock::http::Method::POST)
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&login_post.body).unwrap();
    let posted = body["password"].as_str().unwrap();
    assert_eq!(posted.len(), 64);
    assert_ne!(posted, "secret");

    use sha2::{Digest, Sha256};
    let inner = hex::encode(Sha256::digest(b"secret"));
    let expected = hex::encode(Sha256::digest(format!("{inner}abcd1234").as_bytes()));
    assert_eq!(posted, expected);
}

#[tokio::test]
async fn user_info_parses_anonymous_session() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "anonymous": true,
            "trackId": "01DPNPDXH4MQJHBF4QX1EFD6Y3",
            "date": "2023-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let user = client.get_user_info().await.unwrap();
    assert!(user.anonymous);
    assert!(!user.signed_in());
}
