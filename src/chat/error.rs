//! Errors surfaced by the chat endpoint

use thiserror::Error;

use crate::llm::ProviderError;

/// Why a chat request produced no reply
///
/// Persistence failures never appear here; they are logged and dropped.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The requested model id is not in the catalog
    #[error("Model '{0}' not supported.")]
    UnknownModel(String),

    /// The provider call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
