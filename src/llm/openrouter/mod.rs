//! OpenRouter-compatible chat-completion provider

pub mod client;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use client::OpenRouterClient;
