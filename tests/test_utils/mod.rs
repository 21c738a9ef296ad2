//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
};

use parlance::api::AppState;
use parlance::api::app;
use parlance::core::AppConfig;

pub const SYSTEM_MESSAGE: &str = "You are an English-only conversation partner.";

/// Config pointing the model provider at `openai_api_hostname`,
/// usually a `mockito` server.
pub fn test_config(openai_api_hostname: &str) -> AppConfig {
    AppConfig {
        openai_model: String::from("gpt-3.5-turbo"),
        openai_api_hostname: openai_api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        system_message: String::from(SYSTEM_MESSAGE),
        context_window: 8,
        turn_limit: None,
        cors_origins: vec![
            String::from("*"),
            String::from("http://localhost:5173"),
            String::from("http://127.0.0.1:5173"),
        ],
    }
}

/// Creates a test application router along with its state so tests
/// can look at the stored transcripts.
pub fn test_app_with_state(config: AppConfig) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    (app(Arc::clone(&state)), state)
}

pub fn test_app(config: AppConfig) -> Router {
    test_app_with_state(config).0
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A chat completion response from the provider containing `content`
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}
