//! Shared test helpers: canned Gemini and chat-completion servers.
#![allow(dead_code)]

use std::time::Duration;

use konnectops::config::KonnectConfig;
use serde_json::{json, Value};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GEMINI_KEY: &str = "gemini-test-key";
pub const OPENAI_KEY: &str = "openai-test-key";

/// Nothing listens on port 1, so connections are refused immediately.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Config pointing both providers at mock servers with a short timeout.
pub fn test_config(gemini: &MockServer, openai: &MockServer) -> KonnectConfig {
    KonnectConfig::new()
        .with_primary_key(GEMINI_KEY)
        .with_secondary_key(OPENAI_KEY)
        .with_primary_base_url(gemini.uri())
        .with_secondary_base_url(openai.uri())
        .with_timeout(Duration::from_secs(1))
}

/// One entry of a `models.list` page.
pub fn model(name: &str, methods: &[&str]) -> Value {
    json!({
        "name": format!("models/{name}"),
        "displayName": name,
        "supportedGenerationMethods": methods,
    })
}

/// A `models.list` page body.
pub fn model_page(models: Vec<Value>, next_page_token: Option<&str>) -> Value {
    let mut body = json!({ "models": models });
    if let Some(token) = next_page_token {
        body["nextPageToken"] = json!(token);
    }
    body
}

pub fn gemini_text(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 2, "totalTokenCount": 6}
    })
}

pub fn chat_text(text: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
}

pub async fn mount_models(server: &MockServer, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("x-goog-api-key", GEMINI_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub async fn mount_generation(
    server: &MockServer,
    model: &str,
    response: ResponseTemplate,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path(format!("/models/{model}:generateContent")))
        .and(header("x-goog-api-key", GEMINI_KEY))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub async fn mount_chat(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Fails verification on drop if any request reaches `server`.
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
