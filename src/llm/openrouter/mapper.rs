//! Request shaping and reply extraction for OpenRouter chat completions

use serde_json::Value;

use crate::llm::core::{
    config::GenerationConfig, error::ProviderError, provider::NO_RESPONSE_PLACEHOLDER,
};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Build a single-turn chat-completion request
pub fn to_chat_request(
    model: &str,
    user_text: &str,
    config: &GenerationConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: user_text.to_string(),
        }],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    }
}

/// Extract `choices[0].message.content`
///
/// Falls back to a vendor-reported error when an `error` field is present,
/// otherwise to the "no response" placeholder.
pub fn from_chat_response(response: Value) -> Result<String, ProviderError> {
    let response: ChatCompletionResponse = serde_json::from_value(response)?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content);

    match (content, response.error) {
        (Some(content), _) => Ok(content),
        (None, Some(error)) => Err(ProviderError::reported(&error)),
        (None, None) => Ok(NO_RESPONSE_PLACEHOLDER.to_string()),
    }
}
