//! End-to-end tests for the conversation adapter against stub provider
//! servers bound on 127.0.0.1:0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use torque_llm::{ConversationAdapter, PREAMBLE, ProviderDescriptor, Turn};
use torque_search::SearchResult;

// ── helpers ──────────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    key: Arc<Mutex<Option<String>>>,
    authorization: Arc<Mutex<Option<String>>>,
}

impl Captured {
    fn body(&self) -> Value {
        self.body.lock().unwrap().clone().expect("request captured")
    }
}

fn record(captured: &Captured, headers: &HeaderMap, params: &HashMap<String, String>, body: Value) {
    *captured.body.lock().unwrap() = Some(body);
    *captured.key.lock().unwrap() = params.get("key").cloned();
    *captured.authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
}

async fn gemini_handler(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&captured, &headers, &params, body);
    Json(json!({
        "candidates": [{ "content": { "parts": [{ "text": "Check fuse 12." }] } }]
    }))
}

async fn openai_handler(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&captured, &headers, &params, body);
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": "Check the belt tensioner." } }]
    }))
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind to port 0");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{addr}")
}

fn civic_fuse_hit() -> Vec<SearchResult> {
    vec![SearchResult {
        title: "Civic Fuse Box".into(),
        url: "https://fuses.test/civic".into(),
        snippet: "Interior fuse panel layout".into(),
    }]
}

// ── tests ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn gemini_sends_key_in_url_and_prefixed_first_turn() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1beta/models/gemini-pro/generate", post(gemini_handler))
        .with_state(captured.clone());
    let base = serve(app).await;

    let descriptor = ProviderDescriptor::gemini("g-key", "gemini-pro")
        .with_endpoint(format!("{base}/v1beta/models/gemini-pro/generate"));
    let adapter = ConversationAdapter::new(descriptor).expect("adapter");

    let turns = [Turn::user("where can i find the fuse diagram for my car")];
    let reply = adapter.send(&turns, Some(civic_fuse_hit())).await;

    assert!(reply.success, "reply failed: {:?}", reply.error);
    assert_eq!(reply.message, "Check fuse 12.");
    assert_eq!(reply.resources, Some(civic_fuse_hit()));

    assert_eq!(captured.key.lock().unwrap().as_deref(), Some("g-key"));
    assert!(captured.authorization.lock().unwrap().is_none());

    let body = captured.body();
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.starts_with(PREAMBLE));
    assert!(text.contains("1. Civic Fuse Box - https://fuses.test/civic"));
    assert!(text.ends_with("User: where can i find the fuse diagram for my car"));
    assert_eq!(body["contents"][0]["role"], "user");
}

#[tokio::test]
async fn gemini_maps_assistant_to_model_role() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/gen", post(gemini_handler))
        .with_state(captured.clone());
    let base = serve(app).await;

    let adapter = ConversationAdapter::new(
        ProviderDescriptor::gemini("g-key", "gemini-pro").with_endpoint(format!("{base}/gen")),
    )
    .expect("adapter");

    let turns = [
        Turn::user("my car shakes"),
        Turn::assistant("At what speed?"),
        Turn::user("around 60"),
    ];
    let reply = adapter.send(&turns, None).await;
    assert!(reply.success);
    assert_eq!(reply.resources, None);

    let body = captured.body();
    let roles: Vec<&str> = body["contents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, ["user", "model", "user"]);
    assert_eq!(body["contents"][0]["parts"][0]["text"], "my car shakes");
}

#[tokio::test]
async fn turn_array_sends_bearer_and_prefixed_content() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/openai/v1/chat/completions", post(openai_handler))
        .with_state(captured.clone());
    let base = serve(app).await;

    let adapter = ConversationAdapter::new(
        ProviderDescriptor::groq("gsk-test", "llama3")
            .with_endpoint(format!("{base}/openai/v1/chat/completions")),
    )
    .expect("adapter");

    let reply = adapter
        .send(&[Turn::user("serpentine belt squeal")], Some(civic_fuse_hit()))
        .await;
    assert!(reply.success);
    assert_eq!(reply.message, "Check the belt tensioner.");

    assert_eq!(
        captured.authorization.lock().unwrap().as_deref(),
        Some("Bearer gsk-test")
    );
    assert!(captured.key.lock().unwrap().is_none());

    let body = captured.body();
    assert_eq!(body["model"], "llama3");
    let content = body["messages"][0]["content"].as_str().unwrap();
    assert!(content.starts_with(PREAMBLE));
    assert!(content.ends_with("\n\nserpentine belt squeal"));
}

#[tokio::test]
async fn system_role_inserts_context_without_resources() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/v1/chat/completions", post(openai_handler))
        .with_state(captured.clone());
    let base = serve(app).await;

    let adapter = ConversationAdapter::new(
        ProviderDescriptor::openai("sk-test", "gpt-4o-mini")
            .with_endpoint(format!("{base}/v1/chat/completions")),
    )
    .expect("adapter");

    let turns = [Turn::user("my car is making a weird noise")];
    let reply = adapter.send(&turns, None).await;
    assert!(reply.success);
    assert_eq!(reply.resources, None);

    let body = captured.body();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], PREAMBLE);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "my car is making a weird noise");
}

#[tokio::test]
async fn provider_error_status_becomes_failed_reply() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base = serve(app).await;

    let adapter = ConversationAdapter::new(
        ProviderDescriptor::openai("sk-test", "gpt-4o-mini")
            .with_endpoint(format!("{base}/v1/chat/completions")),
    )
    .expect("adapter");

    let reply = adapter.send(&[Turn::user("hello")], None).await;
    assert!(!reply.success);
    assert!(reply.message.is_empty());
    let error = reply.error.expect("error present");
    assert!(error.contains("500"), "unexpected error: {error}");
}

#[tokio::test]
async fn malformed_envelope_becomes_failed_reply() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base = serve(app).await;

    let adapter = ConversationAdapter::new(
        ProviderDescriptor::openai("sk-test", "gpt-4o-mini")
            .with_endpoint(format!("{base}/v1/chat/completions")),
    )
    .expect("adapter");

    let reply = adapter.send(&[Turn::user("hello")], Some(civic_fuse_hit())).await;
    assert!(!reply.success);
    assert!(reply.resources.is_none());
    assert!(!reply.error.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn slow_provider_times_out_as_failed_reply() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "choices": [{ "message": { "content": "late" } }] }))
        }),
    );
    let base = serve(app).await;

    let adapter = ConversationAdapter::new(
        ProviderDescriptor::openai("sk-test", "gpt-4o-mini")
            .with_endpoint(format!("{base}/v1/chat/completions"))
            .with_timeout(Duration::from_millis(200)),
    )
    .expect("adapter");

    let reply = adapter.send(&[Turn::user("hello")], None).await;
    assert!(!reply.success);
    assert_eq!(
        reply.error.as_deref(),
        Some("llm request timed out after 200ms")
    );
}
