//! Provider adapter tests against mock upstream servers

mod common;

use chat_relay::llm::http::build_http_client;
use chat_relay::llm::{
    generate_reply, ModelDescriptor, ProviderError, ProviderSettings, UpstreamCause,
    NO_RESPONSE_PLACEHOLDER,
};
use reqwest::Client;
use secrecy::SecretString;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

fn huggingface(server: &MockServer) -> ModelDescriptor {
    ModelDescriptor::HuggingFace {
        url: common::endpoint(&server.uri(), "/models/openlm-research/open_llama_3b"),
        token: secret("hf_test_token"),
    }
}

fn openrouter(server: &MockServer) -> ModelDescriptor {
    ModelDescriptor::OpenRouter {
        url: common::endpoint(&server.uri(), "/api/v1/chat/completions"),
        token: secret("sk-or-test"),
        model: "mistralai/mistral-7b-instruct:free".to_string(),
    }
}

fn google(server: &MockServer) -> ModelDescriptor {
    ModelDescriptor::Google {
        url: common::endpoint(&server.uri(), "/v1beta/models/gemini-2.0-flash:generateContent"),
        api_key: secret("AIza-test"),
    }
}

async fn reply(descriptor: &ModelDescriptor, text: &str) -> Result<String, ProviderError> {
    generate_reply(descriptor, &Client::new(), &ProviderSettings::default(), text).await
}

fn upstream_cause(err: &ProviderError) -> Option<UpstreamCause> {
    match err {
        ProviderError::Upstream { cause, .. } => Some(*cause),
        _ => None,
    }
}

// ============================================================================
// Hugging Face
// ============================================================================

#[tokio::test]
async fn test_huggingface_request_and_echo_strip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/openlm-research/open_llama_3b"))
        .and(header("authorization", "Bearer hf_test_token"))
        .and(body_json(json!({
            "inputs": "Hello",
            "parameters": {"max_new_tokens": 100}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "Hello World"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let text = reply(&huggingface(&server), "Hello").await.unwrap();

    assert_eq!(text, "World");
}

#[tokio::test]
async fn test_huggingface_echo_only_is_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "Hi"}])))
        .mount(&server)
        .await;

    let text = reply(&huggingface(&server), "Hi").await.unwrap();

    assert_eq!(text, NO_RESPONSE_PLACEHOLDER);
}

#[tokio::test]
async fn test_huggingface_reported_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Model is currently loading"})),
        )
        .mount(&server)
        .await;

    let err = reply(&huggingface(&server), "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Reported));
    assert!(err.to_string().contains("Model is currently loading"));
}

#[tokio::test]
async fn test_huggingface_unexpected_shape_is_stringified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": 1})))
        .mount(&server)
        .await;

    let text = reply(&huggingface(&server), "Hello").await.unwrap();

    assert_eq!(text, r#"{"foo":1}"#);
}

// ============================================================================
// OpenRouter
// ============================================================================

#[tokio::test]
async fn test_openrouter_request_and_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-or-test"))
        .and(body_partial_json(json!({
            "model": "mistralai/mistral-7b-instruct:free",
            "messages": [{"role": "user", "content": "Hello"}],
            "max_tokens": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "Hi there"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = reply(&openrouter(&server), "Hello").await.unwrap();

    assert_eq!(text, "Hi there");
}

#[tokio::test]
async fn test_openrouter_empty_choices_is_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let text = reply(&openrouter(&server), "Hello").await.unwrap();

    assert_eq!(text, NO_RESPONSE_PLACEHOLDER);
}

#[tokio::test]
async fn test_openrouter_reported_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"message": "No auth credentials found", "code": 401}
        })))
        .mount(&server)
        .await;

    let err = reply(&openrouter(&server), "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Reported));
    assert!(err.to_string().contains("No auth credentials found"));
}

#[tokio::test]
async fn test_openrouter_non_2xx_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let err = reply(&openrouter(&server), "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Status(503)));
    assert!(err.to_string().contains("upstream overloaded"));
}

#[tokio::test]
async fn test_openrouter_error_body_on_non_2xx_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "No auth credentials found", "code": 401}
        })))
        .mount(&server)
        .await;

    let err = reply(&openrouter(&server), "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Reported));
    assert_eq!(
        err.to_string(),
        "Upstream error: No auth credentials found"
    );
}

#[tokio::test]
async fn test_openrouter_placeholder_token_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let descriptor = ModelDescriptor::OpenRouter {
        url: common::endpoint(&server.uri(), "/api/v1/chat/completions"),
        token: secret("YOUR_OPENROUTER_KEY"),
        model: "mistralai/mistral-7b-instruct:free".to_string(),
    };

    let err = reply(&descriptor, "Hello").await.unwrap_err();

    assert!(matches!(err, ProviderError::Configuration(_)));
    server.verify().await;
}

// ============================================================================
// Google
// ============================================================================

#[tokio::test]
async fn test_google_request_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "AIza-test"))
        .and(body_json(json!({"contents": [{"parts": [{"text": "Hello"}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Hi from Gemini"}], "role": "model"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = reply(&google(&server), "Hello").await.unwrap();

    assert_eq!(text, "Hi from Gemini");
}

#[tokio::test]
async fn test_google_missing_candidates_is_invalid_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = reply(&google(&server), "Hello").await.unwrap_err();

    assert!(matches!(err, ProviderError::InvalidUpstreamShape(_)));
    assert!(err.to_string().contains("Invalid response from Gemini"));
}

#[tokio::test]
async fn test_google_reported_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let err = reply(&google(&server), "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Reported));
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_google_error_status_with_error_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let err = reply(&google(&server), "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Reported));
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_huggingface_loading_503_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": "Model is currently loading",
            "estimated_time": 20.0
        })))
        .mount(&server)
        .await;

    let err = reply(&huggingface(&server), "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Reported));
    assert!(err.to_string().contains("Model is currently loading"));
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_non_json_body_is_invalid_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = reply(&openrouter(&server), "Hello").await.unwrap_err();

    assert!(matches!(err, ProviderError::InvalidUpstreamShape(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "late"}}]}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let client = build_http_client(Duration::from_millis(200)).unwrap();

    let err = generate_reply(
        &openrouter(&server),
        &client,
        &ProviderSettings::default(),
        "Hello",
    )
    .await
    .unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Timeout));
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    // Bind then drop a mock server so its port refuses connections
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let descriptor = ModelDescriptor::HuggingFace {
        url: common::endpoint(&uri, "/models/x"),
        token: secret("hf_test_token"),
    };

    let err = reply(&descriptor, "Hello").await.unwrap_err();

    assert_eq!(upstream_cause(&err), Some(UpstreamCause::Transport));
}
