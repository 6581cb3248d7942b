//! Request shaping and reply extraction for Hugging Face inference

use serde_json::Value;

use crate::llm::core::{
    config::GenerationConfig, error::ProviderError, provider::NO_RESPONSE_PLACEHOLDER,
};

use super::types::{Generation, InferenceParameters, InferenceRequest};

/// Build the inference request for one user message
pub fn to_inference_request(user_text: &str, config: &GenerationConfig) -> InferenceRequest {
    InferenceRequest {
        inputs: user_text.to_string(),
        parameters: InferenceParameters {
            max_new_tokens: config.max_tokens,
        },
    }
}

/// Extract the reply text from an inference response
///
/// - `[{"generated_text": ...}, ...]`: the first generation, with a leading
///   echo of `user_text` stripped and the rest trimmed; empty text becomes
///   the placeholder
/// - `{"error": ...}`: a vendor-reported upstream error
/// - anything else is returned as its JSON text
pub fn from_inference_response(response: Value, user_text: &str) -> Result<String, ProviderError> {
    if let Some(error) = response.as_object().and_then(|fields| fields.get("error")) {
        return Err(ProviderError::reported(error));
    }

    let generated = response
        .as_array()
        .and_then(|generations| generations.first())
        .and_then(|first| serde_json::from_value::<Generation>(first.clone()).ok())
        .and_then(|generation| generation.generated_text);

    match generated {
        Some(text) => Ok(strip_echo(&text, user_text)),
        None => Ok(response.to_string()),
    }
}

/// Only the remainder after a removed echo is trimmed
fn strip_echo(generated: &str, user_text: &str) -> String {
    let reply = match generated.strip_prefix(user_text) {
        Some(rest) if !user_text.is_empty() => rest.trim(),
        _ => generated,
    };

    if reply.is_empty() {
        NO_RESPONSE_PLACEHOLDER.to_string()
    } else {
        reply.to_string()
    }
}
