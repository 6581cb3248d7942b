//! Mapping between a user message and Gemini types

use serde_json::Value;

use crate::llm::core::error::ProviderError;

use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};

/// Build a single-turn `generateContent` request
pub fn to_gemini_request(user_text: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: None,
            parts: vec![Part {
                text: Some(user_text.to_string()),
            }],
        }],
    }
}

/// Extract `candidates[0].content.parts[0].text`
///
/// Unlike the other providers there is no placeholder fallback: a reply
/// without that text is either a reported error or an invalid shape.
pub fn from_gemini_response(response: Value) -> Result<String, ProviderError> {
    let raw = response.to_string();
    let response: GenerateContentResponse = serde_json::from_value(response)
        .map_err(|e| ProviderError::InvalidUpstreamShape(format!("{e}: {raw}")))?;

    let text = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text);

    match (text, response.error) {
        (Some(text), _) => Ok(text),
        (None, Some(error)) => Err(ProviderError::reported(&error)),
        (None, None) => Err(ProviderError::InvalidUpstreamShape(format!(
            "Invalid response from Gemini: {raw}"
        ))),
    }
}
