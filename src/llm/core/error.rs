//! Error types for the provider adapter

use thiserror::Error;

/// What went wrong with an upstream call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCause {
    /// Connection refused, DNS failure, broken body
    Transport,
    /// The outbound call exceeded its timeout
    Timeout,
    /// Upstream answered with a non-2xx status
    Status(u16),
    /// Upstream answered 2xx but the body carried an `error` field
    Reported,
}

/// Errors that can occur when asking a provider for a reply
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Missing or placeholder credential, or an incomplete model entry
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Model entry names a provider family this relay does not speak
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Transport failure, timeout, non-2xx status or vendor-reported error
    #[error("Upstream error: {detail}")]
    Upstream { cause: UpstreamCause, detail: String },

    /// The upstream reply did not have the JSON shape we expected
    #[error("Invalid upstream response: {0}")]
    InvalidUpstreamShape(String),
}

impl ProviderError {
    /// Build an error for a vendor-reported `error` payload
    pub fn reported(error: &serde_json::Value) -> Self {
        let detail = match error {
            serde_json::Value::String(message) => message.clone(),
            serde_json::Value::Object(fields) => fields
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
            other => other.to_string(),
        };
        ProviderError::Upstream {
            cause: UpstreamCause::Reported,
            detail,
        }
    }

    /// Taxonomy name of this error, as reported to callers
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Configuration(_) => "ConfigurationError",
            ProviderError::UnsupportedProvider(_) => "UnsupportedProvider",
            ProviderError::Upstream { .. } => "UpstreamError",
            ProviderError::InvalidUpstreamShape(_) => "InvalidUpstreamShape",
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidUpstreamShape(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            UpstreamCause::Timeout
        } else if let Some(status) = err.status() {
            UpstreamCause::Status(status.as_u16())
        } else {
            UpstreamCause::Transport
        };
        ProviderError::Upstream {
            cause,
            detail: err.to_string(),
        }
    }
}
