//! Hugging Face text-generation inference provider
//!
//! Sends `{inputs, parameters}` with bearer auth and reads `generated_text`
//! from the first generation in the reply.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use client::HuggingFaceClient;
