use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use http::{Method, Request};
use http_body_util::BodyExt;
use prompt_gateway::{
    build_app, AppState, GeminiClient, GenerativeModel, ModelConfig, ModelError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const TEST_KEY: &str = "test-key";

// Echoes the prompt back, or fails the way Gemini does for a bad key.
async fn mock_generate_content(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(TEST_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
            })),
        );
    }

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    if prompt == "blocked" {
        return (
            StatusCode::OK,
            Json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": {"parts": [{"text": format!("echo: {prompt}")}], "role": "model"},
                "finishReason": "STOP"
            }]
        })),
    )
}

async fn spawn_mock_gemini_server() -> String {
    let app = Router::new().route(
        "/v1beta/models/gemini-test:generateContent",
        post(mock_generate_content),
    );
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str, api_key: &str) -> GeminiClient {
    let config = ModelConfig {
        model: "gemini-test".to_string(),
        base_url: base_url.to_string(),
        timeout_ms: 5_000,
        ..ModelConfig::for_key(api_key)
    };
    GeminiClient::new(&config).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn client_round_trips_prompt() {
    let base_url = spawn_mock_gemini_server().await;

    let response = client(&base_url, TEST_KEY)
        .generate_content("hello")
        .await
        .unwrap();

    assert_eq!(response.first_text(), Some("echo: hello"));
}

#[tokio::test]
async fn client_surfaces_api_error_message() {
    let base_url = spawn_mock_gemini_server().await;

    let err = client(&base_url, "wrong-key")
        .generate_content("hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ModelError::Rejected(_)));
    assert_eq!(err.to_string(), "API key not valid.");
}

#[tokio::test]
async fn client_reports_unreachable_service() {
    let err = client("http://127.0.0.1:1", TEST_KEY)
        .generate_content("hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ModelError::Transport(_)));
}

#[tokio::test]
async fn e2e_generate_through_gemini() {
    let base_url = spawn_mock_gemini_server().await;
    let app = build_app(AppState::new(Arc::new(client(&base_url, TEST_KEY))));

    let response = app
        .oneshot(post_json(
            "/generate",
            r#"{"problem":"Two sum","language":"Java","mode":"detail"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    let solution = body["solution"].as_str().unwrap();
    assert!(solution.starts_with("echo: Solve this DSA problem in Java."));
    assert!(solution.contains("Instructions: Give the code with a detailed step-by-step explanation."));
}

#[tokio::test]
async fn e2e_blocked_question_is_bad_gateway() {
    let base_url = spawn_mock_gemini_server().await;
    let app = build_app(AppState::new(Arc::new(client(&base_url, TEST_KEY))));

    let response = app
        .oneshot(post_json("/question_ans", r#"{"question":"blocked"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn e2e_question_ans_through_gemini() {
    let base_url = spawn_mock_gemini_server().await;
    let app = build_app(AppState::new(Arc::new(client(&base_url, TEST_KEY))));

    let response = app
        .oneshot(post_json("/question_ans", r#"{"question":"2+2?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"answer":"echo: 2+2?"}"#);
}

#[tokio::test]
async fn e2e_bad_key_is_server_error() {
    let base_url = spawn_mock_gemini_server().await;
    let app = build_app(AppState::new(Arc::new(client(&base_url, "wrong-key"))));

    let response = app
        .oneshot(post_json(
            "/generate",
            r#"{"problem":"Two sum","language":"Java","mode":"brief"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], br#"{"error":"API key not valid."}"#);
}
