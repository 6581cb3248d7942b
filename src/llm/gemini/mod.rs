//! Google generative-language provider
//!
//! This module provides a client for Gemini `generateContent` endpoints
//! authenticated with an API key query parameter.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use client::GeminiClient;
