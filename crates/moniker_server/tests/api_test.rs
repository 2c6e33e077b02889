//! Tests for the HTTP API routes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use moniker_core::{GenerationRequest, USERNAME_REQUESTED};
use moniker_server::{EventBus, GeneratedRecord, UsernameStore, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_router() -> (Router, EventBus, UsernameStore) {
    let bus = EventBus::with_default_capacity();
    let store = UsernameStore::new();
    let router = create_router(bus.clone(), store.clone());
    (router, bus, store)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let (router, _, _) = test_router();

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn generate_username_publishes_request_and_accepts() {
    let (router, bus, _) = test_router();
    let mut rx = bus.subscribe(USERNAME_REQUESTED).await;

    let response = router
        .oneshot(post_json(
            "/api/generate-username",
            json!({ "theme": "gaming", "keywords": ["pixel"], "count": 3 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Username generation started");
    assert_eq!(body["theme"], "gaming");
    assert_eq!(body["count"], 3);
    let request_id = body["requestId"].as_str().expect("requestId in 202 body");

    let event = rx.try_recv().expect("request event published");
    let request: GenerationRequest = event.decode().unwrap();
    assert_eq!(request.theme(), "gaming");
    assert_eq!(request.keywords(), &["pixel".to_string()]);
    assert_eq!(*request.count(), 3);
    assert_eq!(request.request_id(), request_id);
}

#[tokio::test]
async fn generate_username_defaults_count_to_five() {
    let (router, bus, _) = test_router();
    let mut rx = bus.subscribe(USERNAME_REQUESTED).await;

    let response = router
        .oneshot(post_json(
            "/api/generate-username",
            json!({ "theme": "general" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let request: GenerationRequest = rx.try_recv().unwrap().decode().unwrap();
    assert_eq!(*request.count(), 5);
    assert!(request.keywords().is_empty());
}

#[tokio::test]
async fn generate_username_rejects_out_of_bounds_count() {
    for count in [0, 11] {
        let (router, bus, _) = test_router();
        let mut rx = bus.subscribe(USERNAME_REQUESTED).await;

        let response = router
            .oneshot(post_json(
                "/api/generate-username",
                json!({ "theme": "gaming", "count": count }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(rx.try_recv().is_err());
    }
}

#[tokio::test]
async fn generate_username_requires_a_theme() {
    let (router, _, _) = test_router();

    let response = router
        .oneshot(post_json("/api/generate-username", json!({ "count": 3 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_usernames_serves_stored_record() {
    let (router, _, store) = test_router();
    let generated_at = Utc::now();
    store
        .insert(
            "req-1",
            GeneratedRecord::new(
                "gaming",
                vec!["pixel_punk".to_string(), "retro.rogue".to_string()],
                generated_at,
            ),
        )
        .await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/usernames/req-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["requestId"], "req-1");
    assert_eq!(body["theme"], "gaming");
    assert_eq!(body["usernames"], json!(["pixel_punk", "retro.rogue"]));
}

#[tokio::test]
async fn get_usernames_returns_404_for_unknown_request() {
    let (router, _, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/usernames/no-such-request")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
