//! Router tests with stub providers.

use atelier_rs_config::IdentityConfig;
use atelier_rs_core::Stylist;
use atelier_rs_llm::CompletionProvider;
use atelier_rs_memory::MemoryStore;
use atelier_rs_server::{AppState, build_router};
use atelier_rs_test_utils::{
    FailingCompletion, FailingMemoryStore, FixedCompletion, RecordingMemoryStore,
};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn router_with(
    completion: Option<Arc<dyn CompletionProvider>>,
    memory: Arc<dyn MemoryStore>,
) -> Router {
    let stylist = Stylist::new(completion, memory.clone(), IdentityConfig::default(), 4);
    build_router(Arc::new(AppState::new(stylist, memory)))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn outfit_body() -> Value {
    json!({
        "event": "dinner with friends",
        "weather": "70°F",
        "mood": "confident"
    })
}

#[tokio::test]
async fn welcome_answers_ok() {
    let router = router_with(None, Arc::new(RecordingMemoryStore::new()));
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert!(body["message"].as_str().expect("message").contains("Atelier"));
}

#[tokio::test]
async fn generate_outfit_returns_exactly_the_stubbed_text() {
    let memory = Arc::new(RecordingMemoryStore::new());
    let router = router_with(
        Some(Arc::new(FixedCompletion::new("stubbed outfit"))),
        memory.clone(),
    );

    let response = router
        .oneshot(post_json("/generate-outfit", outfit_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, json!({ "outfit": "stubbed outfit" }));

    let logged = memory.logged.lock().clone();
    assert_eq!(logged.len(), 1);
    for piece in ["dinner with friends", "70°F", "confident"] {
        assert!(logged[0].episode_content.contains(piece));
    }
}

#[tokio::test]
async fn generate_outfit_survives_a_dead_memory_service() {
    let router = router_with(
        Some(Arc::new(FixedCompletion::new("resilient outfit"))),
        Arc::new(FailingMemoryStore::new()),
    );

    let response = router
        .oneshot(post_json("/generate-outfit", outfit_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["outfit"], "resilient outfit");
}

#[tokio::test]
async fn generate_outfit_maps_provider_failure_to_502() {
    let router = router_with(
        Some(Arc::new(FailingCompletion::new("quota exceeded"))),
        Arc::new(RecordingMemoryStore::new()),
    );

    let response = router
        .oneshot(post_json("/generate-outfit", outfit_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json(response).await;
    let detail = body["detail"].as_str().expect("detail");
    assert!(!detail.contains("quota"), "leaked upstream detail: {detail}");
}

#[tokio::test]
async fn generate_outfit_reports_not_configured_as_503() {
    let router = router_with(None, Arc::new(RecordingMemoryStore::new()));
    let response = router
        .oneshot(post_json("/generate-outfit", outfit_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn generate_outfit_rejects_blank_fields_as_422() {
    let router = router_with(
        Some(Arc::new(FixedCompletion::new("unused"))),
        Arc::new(RecordingMemoryStore::new()),
    );
    let response = router
        .oneshot(post_json(
            "/generate-outfit",
            json!({ "event": "  ", "weather": "70°F", "mood": "confident" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert_eq!(body["detail"], "event must not be empty");
}

#[tokio::test]
async fn offline_variant_needs_no_provider() {
    let router = router_with(None, Arc::new(RecordingMemoryStore::new()));
    let response = router
        .oneshot(post_json("/generate-outfit-offline", outfit_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let outfit = body["outfit"].as_str().expect("outfit");
    assert!(outfit.contains("dinner with friends"));
    assert!(outfit.contains("70°F"));
}

#[tokio::test]
async fn memory_proxy_passes_the_raw_response_through() {
    let router = router_with(None, Arc::new(RecordingMemoryStore::new()));
    let payload = json!({
        "session": { "group_id": "fashion-group-01" },
        "query": "Show all outfit recommendations",
        "limit": 20
    });
    let response = router
        .oneshot(post_json("/api/memories/search", payload.clone()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    // The recording stub echoes the body, proving passthrough.
    assert_eq!(read_json(response).await, payload);
}

#[tokio::test]
async fn memory_proxy_maps_upstream_failure_to_502() {
    let router = router_with(None, Arc::new(FailingMemoryStore::new()));
    let response = router
        .oneshot(post_json("/api/memories/search", json!({ "query": "q" })))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json(response).await;
    assert_eq!(body["detail"], "memory search failed");
}
