//! Requests through the full warp filter tree

mod common;

use chat_relay::chat::ChatService;
use chat_relay::chat_db::{ChatDbClient, ChatRole, ChatStore, NewChatTurn};
use chat_relay::llm::{BuiltinCredentials, ModelCatalog, ModelDescriptor, ProviderSettings};
use chat_relay::routes::configure_routes;
use reqwest::Client;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use warp::http::StatusCode;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup(catalog: ModelCatalog) -> (TempDir, ChatDbClient, Arc<ChatService>) {
    let (dir, store) = common::temp_store().await;
    let service = Arc::new(ChatService::new(
        Arc::new(catalog),
        Arc::new(store.clone()),
        Client::new(),
        ProviderSettings::default(),
    ));
    (dir, store, service)
}

fn json_body<B: AsRef<[u8]>>(response: &warp::http::Response<B>) -> Value {
    serde_json::from_slice(response.body().as_ref()).expect("response body is not JSON")
}

// ============================================================================
// POST /chat
// ============================================================================

#[tokio::test]
async fn test_post_chat_with_empty_session_id_stores_both_turns() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "hi"}}]
        })))
        .mount(&server)
        .await;
    let catalog = ModelCatalog::new().with_model(
        "mistral",
        "Mistral",
        ModelDescriptor::OpenRouter {
            url: common::endpoint(&server.uri(), "/api/v1/chat/completions"),
            token: SecretString::from("sk-or-test".to_string()),
            model: "mistralai/mistral-7b-instruct:free".to_string(),
        },
    );
    let (_dir, store, service) = setup(catalog).await;
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("POST")
        .path("/chat")
        .header("content-type", "application/json")
        .body(r#"{"message":"Hello","model":"mistral","sessionId":""}"#)
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(&response),
        json!({"response": "hi", "model": "mistral", "sessionId": ""})
    );
    let turns = store.list_ordered("").await.unwrap();
    let roles: Vec<ChatRole> = turns.iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![ChatRole::User, ChatRole::Ai]);
}

#[tokio::test]
async fn test_post_chat_malformed_body_is_json_400() {
    let (_dir, _store, service) = setup(ModelCatalog::new()).await;
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("POST")
        .path("/chat")
        .header("content-type", "application/json")
        .body(r#"{"message": "#)
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(&response)["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_post_chat_missing_message_is_json_400() {
    let (_dir, _store, service) = setup(ModelCatalog::new()).await;
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("POST")
        .path("/chat")
        .json(&json!({"model": "mistral"}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(&response)["error"].is_string());
}

#[tokio::test]
async fn test_post_chat_wrong_content_type_is_415() {
    let (_dir, _store, service) = setup(ModelCatalog::new()).await;
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("POST")
        .path("/chat")
        .header("content-type", "text/plain")
        .body(r#"{"message":"Hello"}"#)
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(json_body(&response)["error"].is_string());
}

#[tokio::test]
async fn test_post_chat_unknown_model_is_400() {
    let (_dir, store, service) = setup(ModelCatalog::new()).await;
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("POST")
        .path("/chat")
        .json(&json!({"message": "Hello", "model": "gpt-9"}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(&response),
        json!({"error": "Model 'gpt-9' not supported."})
    );
    assert!(store.list_sessions().await.unwrap().is_empty());
}

// ============================================================================
// GET /chat/history
// ============================================================================

#[tokio::test]
async fn test_history_defaults_to_default_session() {
    let (_dir, store, service) = setup(ModelCatalog::new()).await;
    store
        .append(NewChatTurn::user("default", "from default"))
        .await
        .unwrap();
    store.append(NewChatTurn::user("other", "elsewhere")).await.unwrap();
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("GET")
        .path("/chat/history")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(&response);
    assert_eq!(body["sessionId"], "default");
    assert_eq!(body["history"].as_array().unwrap().len(), 1);
    assert_eq!(body["history"][0]["message"], "from default");
    assert_eq!(body["history"][0]["role"], "user");
}

#[tokio::test]
async fn test_history_accepts_both_session_spellings() {
    let (_dir, store, service) = setup(ModelCatalog::new()).await;
    store.append(NewChatTurn::user("abc", "one")).await.unwrap();
    store.append(NewChatTurn::ai("abc", "two")).await.unwrap();
    let routes = configure_routes(service);

    for query in ["sessionId=abc", "session_id=abc"] {
        let response = warp::test::request()
            .method("GET")
            .path(&format!("/chat/history?{}", query))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK, "{query}");
        let body = json_body(&response);
        assert_eq!(body["sessionId"], "abc");
        let messages: Vec<&str> = body["history"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["message"].as_str().unwrap())
            .collect();
        assert_eq!(messages, vec!["one", "two"], "{query}");
    }
}

// ============================================================================
// DELETE /chat/clear
// ============================================================================

#[tokio::test]
async fn test_clear_requires_session_id() {
    let (_dir, store, service) = setup(ModelCatalog::new()).await;
    store.append(NewChatTurn::user("default", "keep me")).await.unwrap();
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("DELETE")
        .path("/chat/clear")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(&response)["error"].is_string());
    assert_eq!(store.list_ordered("default").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_with_snake_case_session_id() {
    let (_dir, store, service) = setup(ModelCatalog::new()).await;
    store.append(NewChatTurn::user("xyz", "a")).await.unwrap();
    store.append(NewChatTurn::ai("xyz", "b")).await.unwrap();
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("DELETE")
        .path("/chat/clear?session_id=xyz")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(&response),
        json!({"status": "cleared", "sessionId": "xyz", "deletedMessages": 2})
    );
    assert!(store.list_ordered("xyz").await.unwrap().is_empty());
}

// ============================================================================
// Catalog, health and recovery
// ============================================================================

#[tokio::test]
async fn test_sessions_models_and_health() {
    let (_dir, store, service) =
        setup(ModelCatalog::builtin(BuiltinCredentials::default())).await;
    store.append(NewChatTurn::user("s1", "hi")).await.unwrap();
    let routes = configure_routes(service);

    let sessions = warp::test::request()
        .path("/chat/sessions")
        .reply(&routes)
        .await;
    assert_eq!(sessions.status(), StatusCode::OK);
    assert_eq!(json_body(&sessions)["sessions"][0]["sessionId"], "s1");

    let models = warp::test::request().path("/models").reply(&routes).await;
    assert_eq!(models.status(), StatusCode::OK);
    assert_eq!(json_body(&models)["models"]["open_llama"]["type"], "huggingface");

    let health = warp::test::request().path("/health").reply(&routes).await;
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(json_body(&health), json!({"status": "ok"}));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (_dir, _store, service) = setup(ModelCatalog::new()).await;
    let routes = configure_routes(service);

    let response = warp::test::request()
        .path("/chat/unknown")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(&response), json!({"error": "Not found"}));
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let (_dir, _store, service) = setup(ModelCatalog::new()).await;
    let routes = configure_routes(service);

    let response = warp::test::request()
        .method("GET")
        .path("/chat")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json_body(&response), json!({"error": "Method not allowed"}));
}
