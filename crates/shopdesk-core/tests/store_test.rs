#![allow(clippy::unwrap_used)]
// Store behavior against a mock back office: cache semantics, processing
// flag settlement, enrichment, and reference-fetch coalescing.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdesk_api::{AdminClient, TransportConfig};
use shopdesk_core::{BrandStore, ListParams, OrderStore, StatusDirectory};

// ── Helpers ─────────────────────────────────────────────────────────

fn client_for(server: &MockServer) -> Arc<AdminClient> {
    Arc::new(AdminClient::new(&server.uri(), &TransportConfig::default()).unwrap())
}

fn brand_store(client: &Arc<AdminClient>) -> Arc<BrandStore> {
    let statuses = Arc::new(StatusDirectory::shared(Arc::clone(client)));
    Arc::new(BrandStore::new(Arc::clone(client), statuses))
}

async fn mount_statuses(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/commons/statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statuses": [
                {"name": "enabled", "value": 0},
                {"name": "disabled", "value": 1}
            ]
        })))
        .mount(server)
        .await;
}

fn patch_doc(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other:?}"),
    }
}

// ── End-to-end list + enrichment ────────────────────────────────────

#[tokio::test]
async fn list_caches_enriched_records_and_count() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 1, "status": 0, "updatedAt": "2023-01-01T00:00:00Z"}],
            "count": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);

    let items = store
        .list(&ListParams {
            limit: Some(10),
            ..ListParams::default()
        })
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].status_desc.as_deref(), Some("enabled"));
    assert_eq!(items[0].updated_at_desc.as_deref(), Some("2023-01-01"));
    assert_eq!(store.count(), 1);

    let cached = store.cached().unwrap();
    assert_eq!(cached[0].status_desc.as_deref(), Some("enabled"));
}

#[tokio::test]
async fn list_replaces_data_wholesale() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    // First page: ids 1 and 2, with a count.
    let first = Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 1, "status": 0}, {"id": 2, "status": 0}],
            "count": 9
        })))
        .up_to_n_times(1)
        .mount_as_scoped(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);
    store.list(&ListParams::default()).await.unwrap();
    assert_eq!(store.cached().unwrap().len(), 2);
    drop(first);

    // Second page: id 3 only, no count. Data must be replaced (not
    // merged), count must survive.
    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 3, "status": 1}]
        })))
        .mount(&server)
        .await;

    store.list(&ListParams::default()).await.unwrap();
    let cached = store.cached().unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, 3);
    assert_eq!(store.count(), 9);
}

// ── get_by_id ───────────────────────────────────────────────────────

#[tokio::test]
async fn get_by_id_hits_cache_without_network() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 7, "name": "acme", "status": 0}],
            "count": 1
        })))
        .mount(&server)
        .await;

    // The detail endpoint must never be called on a cache hit.
    Mock::given(method("GET"))
        .and(path("/brands/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);
    store.list(&ListParams::default()).await.unwrap();

    let brand = store.get_by_id(7).await.unwrap();
    assert_eq!(brand.name, "acme");
}

#[tokio::test]
async fn get_by_id_falls_through_on_empty_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 7, "name": "acme", "status": 0, "updatedAt": "2023-06-01T08:00:00Z"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);

    // Never listed: the lookup scans an absent cache and fetches.
    let brand = store.get_by_id(7).await.unwrap();
    assert_eq!(brand.name, "acme");
    assert_eq!(brand.updated_at_desc.as_deref(), Some("2023-06-01"));
    // The status directory never loaded, so no label was attached.
    assert!(brand.status_desc.is_none());
    // And the fetched record is not inserted into the list cache.
    assert!(store.cached().is_none());
}

// ── update_by_id ────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_into_cached_record_and_re_enriches() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 1, "name": "acme", "catalog": "tea", "status": 0}],
            "count": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/brands/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);
    store.list(&ListParams::default()).await.unwrap();

    store
        .update_by_id(1, patch_doc(json!({"name": "zenith", "status": 1})))
        .await
        .unwrap();

    let cached = store.cached().unwrap();
    // Superset merge: patched fields new, untouched fields preserved.
    assert_eq!(cached[0].name, "zenith");
    assert_eq!(cached[0].catalog, "tea");
    // Re-enriched against the directory.
    assert_eq!(cached[0].status_desc.as_deref(), Some("disabled"));
}

#[tokio::test]
async fn update_with_unknown_id_leaves_cache_unchanged() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 1, "name": "acme", "status": 0}],
            "count": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/brands/99"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);
    store.list(&ListParams::default()).await.unwrap();

    store
        .update_by_id(99, patch_doc(json!({"name": "ghost"})))
        .await
        .unwrap();

    let cached = store.cached().unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].name, "acme");
}

#[tokio::test]
async fn empty_update_is_a_silent_noop() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let store = brand_store(&client);

    store.update_by_id(1, patch_doc(json!({}))).await.unwrap();
    // A payload that strips down to nothing is also a no-op.
    store
        .update_by_id(1, patch_doc(json!({"statusDesc": "enabled"})))
        .await
        .unwrap();

    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(!store.processing().is_processing());
}

// ── Processing flag ─────────────────────────────────────────────────

#[tokio::test]
async fn processing_is_raised_for_the_whole_flight() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"brands": [], "count": 0}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);

    let task = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.list(&ListParams::default()).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.processing().is_processing());

    task.await.unwrap().unwrap();
    assert!(!store.processing().is_processing());
}

#[tokio::test]
async fn processing_is_lowered_on_failure() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "keyword is too long",
            "code": "validate-fail"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);

    let err = store.list(&ListParams::default()).await.unwrap_err();
    assert_eq!(err.message(), "keyword is too long");
    assert_eq!(err.code(), Some("validate-fail"));
    assert!(!store.processing().is_processing());
}

#[tokio::test]
async fn timeout_rejects_with_normalized_message_and_settles() {
    let server = MockServer::start().await;
    mount_statuses(&server).await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"brands": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let transport = TransportConfig {
        timeout: Duration::from_millis(150),
        ..TransportConfig::default()
    };
    let client = Arc::new(AdminClient::new(&server.uri(), &transport).unwrap());
    let store = brand_store(&client);

    let err = store.list(&ListParams::default()).await.unwrap_err();
    assert_eq!(err.message(), "request timed out, please retry");
    assert!(!store.processing().is_processing());
}

// ── Reference fetch coalescing ──────────────────────────────────────

#[tokio::test]
async fn concurrent_lists_issue_one_status_fetch() {
    let server = MockServer::start().await;

    // The delay keeps the first status fetch outstanding while the
    // other callers arrive; expect(1) fails the test on any duplicate.
    Mock::given(method("GET"))
        .and(path("/commons/statuses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"statuses": [{"name": "enabled", "value": 0}]}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brands": [{"id": 1, "status": 0}],
            "count": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = brand_store(&client);

    let calls = (0..5).map(|_| {
        let store = Arc::clone(&store);
        async move { store.list(&ListParams::default()).await }
    });
    for result in futures::future::join_all(calls).await {
        result.unwrap();
    }

    // A later call still reuses the cached directory.
    store.list(&ListParams::default()).await.unwrap();

    server.verify().await;
}

// ── Orders ──────────────────────────────────────────────────────────

#[tokio::test]
async fn orders_enrich_amounts_address_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/statuses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statuses": [{"name": "paid", "value": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{
                "sn": "SN-001",
                "amount": 12.5,
                "payAmount": 10.0,
                "status": 2,
                "receiverBaseAddressDesc": "Hangzhou, Xihu",
                "receiverAddress": "No. 1 Longjing Rd",
                "createdAt": "2023-03-08T09:30:00Z"
            }],
            "count": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = OrderStore::new(Arc::clone(&client));

    let orders = store.list(&ListParams::default()).await.unwrap();
    let order = &orders[0];
    assert_eq!(order.amount_desc.as_deref(), Some("12.50"));
    assert_eq!(order.pay_amount_desc.as_deref(), Some("10.00"));
    assert_eq!(
        order.address.as_deref(),
        Some("Hangzhou, XihuNo. 1 Longjing Rd")
    );
    assert_eq!(order.status_desc.as_deref(), Some("paid"));
    assert_eq!(order.created_at_desc.as_deref(), Some("2023-03-08"));

    // Cached order short-circuits the detail endpoint.
    let cached = store.get_by_sn("SN-001").await.unwrap();
    assert_eq!(cached.sn, "SN-001");
    let detail_calls = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/orders/SN-001")
        .count();
    assert_eq!(detail_calls, 0);
}

#[tokio::test]
async fn order_detail_fetches_on_cache_miss() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/SN-042"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "sn": "SN-042",
                "amount": 5.0,
                "payAmount": 5.0,
                "status": 1,
                "subOrders": [{"productName": "Longjing 250g", "productCount": 2}]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let store = OrderStore::new(Arc::clone(&client));

    let order = store.get_by_sn("SN-042").await.unwrap();
    assert_eq!(order.sn, "SN-042");
    let lines = order.sub_orders.unwrap();
    assert_eq!(lines[0].product_name, "Longjing 250g");
    assert_eq!(lines[0].product_count, 2);
    // The miss does not populate the list cache.
    assert!(store.cached().is_none());
}
