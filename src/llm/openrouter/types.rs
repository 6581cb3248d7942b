//! OpenRouter chat-completion request and response types
//!
//! Response fields are optional so that partial replies can be inspected
//! instead of failing deserialization outright.

use serde::{Deserialize, Serialize};

/// Chat-completion request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Upstream model name
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A single chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// "user", "assistant" or "system"
    pub role: String,
    pub content: String,
}

/// Chat-completion response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Present when the vendor rejected the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}
