//! Provider adapter
//!
//! This module provides a unified `generate_reply` contract over three LLM
//! provider families: Hugging Face inference, OpenRouter chat completions and
//! Google Gemini `generateContent`.

pub mod core;
pub mod gemini;
pub mod http;
pub mod huggingface;
pub mod openrouter;

// Re-export commonly used types
pub use self::core::{
    catalog::{BuiltinCredentials, ModelCatalog},
    config::{GenerationConfig, ProviderSettings},
    descriptor::{ModelDescriptor, ModelEntry, ProviderKind},
    error::{ProviderError, UpstreamCause},
    provider::{create_provider, generate_reply, LlmProvider, NO_RESPONSE_PLACEHOLDER},
};
