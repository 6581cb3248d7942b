//! Chat orchestration: persist the user turn, ask the provider, persist the reply

pub mod error;
pub mod service;

pub use error::ChatError;
pub use service::{ChatReply, ChatService};
