//! Downstream forwarding: envelope decoding and error-code translation
//!
//! Each test spins up a stub downstream service on an ephemeral port and
//! drives a [`ServiceClient`] against it.

use std::time::Duration;

use axum::{Json, Router, extract::RawQuery, routing::get};
use edge_gateway::client::ServiceClient;
use http::StatusCode;
use serde_json::{Value, json};
use shared::{ApiResponse, ErrorCode};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn inventory_client(base_url: String) -> ServiceClient {
    ServiceClient::new(
        "inventory-server",
        base_url,
        Duration::from_secs(2),
        ErrorCode::InventoryUnavailable,
    )
}

fn order_client(base_url: String) -> ServiceClient {
    ServiceClient::new(
        "order-server",
        base_url,
        Duration::from_secs(2),
        ErrorCode::NetworkError,
    )
}

#[tokio::test]
async fn success_envelope_passes_through() {
    let app = Router::new().route(
        "/api/products/{id}",
        get(|| async {
            Json(json!({
                "code": 0,
                "message": "OK",
                "data": {"id": "product:espresso", "name": "Espresso", "price": 2.5, "stock": 40}
            }))
        }),
    );
    let client = inventory_client(serve(app).await);

    let envelope = client.get("api/products/product:espresso", None).await.unwrap();
    assert_eq!(envelope.code, Some(0));
    let data = envelope.data.unwrap();
    assert_eq!(data["name"], "Espresso");
    assert_eq!(data["stock"], 40);
}

#[tokio::test]
async fn query_string_is_forwarded_verbatim() {
    let app = Router::new().route(
        "/api/orders",
        get(|RawQuery(query): RawQuery| async move {
            Json(json!({
                "code": 0,
                "message": "OK",
                "data": {"query": query.unwrap_or_default()}
            }))
        }),
    );
    let client = order_client(serve(app).await);

    let envelope = client
        .get("api/orders", Some("user_id=user-1&limit=5&offset=10"))
        .await
        .unwrap();
    assert_eq!(
        envelope.data.unwrap()["query"],
        "user_id=user-1&limit=5&offset=10"
    );
}

#[tokio::test]
async fn error_envelope_translates_to_app_error() {
    let app = Router::new().route(
        "/api/orders",
        get(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({
                    "code": 6002,
                    "message": "Insufficient stock for product 'product:a': requested 2, available 1",
                    "details": {"product_id": "product:a", "requested": 2, "available": 1}
                })),
            )
        }),
    );
    let client = order_client(serve(app).await);

    let err = client.get("api/orders", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InsufficientStock);
    assert_eq!(err.http_status(), StatusCode::CONFLICT);
    assert!(err.message.contains("product:a"));
    assert_eq!(
        err.details.unwrap().get("requested"),
        Some(&Value::from(2))
    );
}

#[tokio::test]
async fn fault_codes_render_generic_outward() {
    let app = Router::new().route(
        "/api/products",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"code": 9002, "message": "rocksdb: io stall on /var/lib/shop"})),
            )
        }),
    );
    let client = inventory_client(serve(app).await);

    let err = client.get("api/products", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The edge render strips the internal cause
    let rendered = ApiResponse::error(&err.sanitized());
    assert_eq!(rendered.message, "Database error");
}

#[tokio::test]
async fn unrecognized_code_maps_to_unknown() {
    let app = Router::new().route(
        "/api/products",
        get(|| async { Json(json!({"code": 1234, "message": "??"})) }),
    );
    let client = inventory_client(serve(app).await);

    let err = client.get("api/products", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::Unknown);
    assert_eq!(err.message, ErrorCode::Unknown.message());
}

#[tokio::test]
async fn garbage_reply_uses_the_leg_fallback() {
    let app = Router::new().route("/api/products", get(|| async { "plain text, not a JSON envelope" }));
    let base = serve(app).await;

    let err = inventory_client(base.clone())
        .get("api/products", None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InventoryUnavailable);
    assert_eq!(err.http_status(), StatusCode::BAD_GATEWAY);

    let err = order_client(base).get("api/products", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NetworkError);
}

#[tokio::test]
async fn unreachable_service_uses_the_leg_fallback() {
    // Grab a free port, then close it again so connections get refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let base = format!("http://{}", addr);

    let err = inventory_client(base.clone())
        .get("api/products", None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InventoryUnavailable);

    let err = order_client(base).get("api/orders", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NetworkError);
}

#[tokio::test]
async fn slow_downstream_hits_the_call_timeout() {
    let app = Router::new().route(
        "/api/orders",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({"code": 0, "message": "OK"}))
        }),
    );
    let client = ServiceClient::new(
        "order-server",
        serve(app).await,
        Duration::from_millis(100),
        ErrorCode::NetworkError,
    );

    let err = client.get("api/orders", None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NetworkError);
}

#[tokio::test]
async fn health_probe_reports_bad_status() {
    let app = Router::new()
        .route("/health", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }));
    let client = inventory_client(serve(app).await);

    let err = client.check_health().await.unwrap_err();
    assert!(err.contains("503"));

    let app = Router::new().route("/health", get(|| async { "OK" }));
    let client = inventory_client(serve(app).await);
    assert!(client.check_health().await.is_ok());
}
