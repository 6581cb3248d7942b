//! Model descriptors: which provider family a model lives behind, and how to reach it

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::str::FromStr;

use super::error::ProviderError;

/// Provider families the relay can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Text-generation inference endpoint (`inputs` / `generated_text`)
    HuggingFace,
    /// OpenRouter-compatible chat completions
    OpenRouter,
    /// Google generative-language `generateContent`
    Google,
}

impl ProviderKind {
    /// Get the provider kind identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::HuggingFace => "huggingface",
            ProviderKind::OpenRouter => "openrouter",
            ProviderKind::Google => "google",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "huggingface" => Ok(ProviderKind::HuggingFace),
            "openrouter" => Ok(ProviderKind::OpenRouter),
            "google" => Ok(ProviderKind::Google),
            other => Err(ProviderError::UnsupportedProvider(other.to_string())),
        }
    }
}

/// How to reach one configured model
///
/// Each variant carries only the fields its provider needs. Credentials are
/// wrapped in [`SecretString`] so they stay out of `Debug` output and logs.
#[derive(Debug)]
pub enum ModelDescriptor {
    HuggingFace {
        url: String,
        token: SecretString,
    },
    OpenRouter {
        url: String,
        token: SecretString,
        /// Upstream model name, e.g. `mistralai/mistral-7b-instruct:free`
        model: String,
    },
    Google {
        url: String,
        api_key: SecretString,
    },
}

impl ModelDescriptor {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ModelDescriptor::HuggingFace { .. } => ProviderKind::HuggingFace,
            ModelDescriptor::OpenRouter { .. } => ProviderKind::OpenRouter,
            ModelDescriptor::Google { .. } => ProviderKind::Google,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ModelDescriptor::HuggingFace { url, .. }
            | ModelDescriptor::OpenRouter { url, .. }
            | ModelDescriptor::Google { url, .. } => url,
        }
    }

    /// Upstream model name, for providers that take one in the request body
    pub fn target_model(&self) -> Option<&str> {
        match self {
            ModelDescriptor::OpenRouter { model, .. } => Some(model),
            _ => None,
        }
    }

    fn credential(&self) -> &SecretString {
        match self {
            ModelDescriptor::HuggingFace { token, .. } => token,
            ModelDescriptor::OpenRouter { token, .. } => token,
            ModelDescriptor::Google { api_key, .. } => api_key,
        }
    }

    /// Fail fast when the credential is empty or still contains the placeholder sentinel.
    ///
    /// Called before any outbound request is built.
    pub fn check_credential(&self, placeholder_sentinel: &str) -> Result<(), ProviderError> {
        let credential = self.credential().expose_secret().trim();
        if credential.is_empty() {
            return Err(ProviderError::Configuration(format!(
                "no credential configured for {} provider",
                self.kind()
            )));
        }
        if !placeholder_sentinel.is_empty() && credential.contains(placeholder_sentinel) {
            return Err(ProviderError::Configuration(format!(
                "credential for {} provider is still a placeholder",
                self.kind()
            )));
        }
        Ok(())
    }
}

/// A configured model: display name plus descriptor
#[derive(Debug)]
pub struct ModelEntry {
    /// Human-readable name shown by the model catalog
    pub name: String,
    pub descriptor: ModelDescriptor,
}
