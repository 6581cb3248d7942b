//! Hugging Face inference request and response types

use serde::{Deserialize, Serialize};

/// Request body for a text-generation inference endpoint
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    /// Prompt text
    pub inputs: String,
    /// Generation parameters
    pub parameters: InferenceParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct InferenceParameters {
    /// Maximum number of tokens to generate
    pub max_new_tokens: u32,
}

/// One element of the generation array the endpoint returns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    /// Generated text; some models echo the prompt at the start
    pub generated_text: Option<String>,
}
