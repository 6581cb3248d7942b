//! The model catalog: model identifier -> model entry
//!
//! Built once at start-up and shared read-only afterwards.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::descriptor::{ModelDescriptor, ModelEntry, ProviderKind};
use super::error::ProviderError;

pub const HUGGINGFACE_OPEN_LLAMA_URL: &str =
    "https://api-inference.huggingface.co/models/openlm-research/open_llama_3b";
pub const OPENROUTER_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const GEMINI_FLASH_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// Credentials for the built-in catalog
#[derive(Debug)]
pub struct BuiltinCredentials {
    pub huggingface_token: SecretString,
    pub openrouter_key: SecretString,
    pub gemini_api_key: SecretString,
}

impl Default for BuiltinCredentials {
    /// Placeholder credentials; every call fails fast until real ones are supplied
    fn default() -> Self {
        Self {
            huggingface_token: SecretString::from("YOUR_HF_TOKEN".to_string()),
            openrouter_key: SecretString::from("YOUR_OPENROUTER_KEY".to_string()),
            gemini_api_key: SecretString::from("YOUR_GEMINI_API_KEY".to_string()),
        }
    }
}

/// On-disk TOML form of a catalog
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    models: BTreeMap<String, RawModelEntry>,
}

#[derive(Debug, Deserialize)]
struct RawModelEntry {
    #[serde(rename = "type")]
    kind: String,
    url: String,
    name: Option<String>,
    token: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
}

impl RawModelEntry {
    fn into_entry(self, model_id: &str) -> Result<ModelEntry, ProviderError> {
        let missing = |field: &str| {
            ProviderError::Configuration(format!("model '{model_id}' is missing `{field}`"))
        };

        let descriptor = match self.kind.parse::<ProviderKind>()? {
            ProviderKind::HuggingFace => ModelDescriptor::HuggingFace {
                url: self.url,
                token: SecretString::from(self.token.ok_or_else(|| missing("token"))?),
            },
            ProviderKind::OpenRouter => ModelDescriptor::OpenRouter {
                url: self.url,
                token: SecretString::from(self.token.ok_or_else(|| missing("token"))?),
                model: self.model.ok_or_else(|| missing("model"))?,
            },
            ProviderKind::Google => ModelDescriptor::Google {
                url: self.url,
                api_key: SecretString::from(self.api_key.ok_or_else(|| missing("api_key"))?),
            },
        };

        Ok(ModelEntry {
            name: self.name.unwrap_or_else(|| model_id.to_string()),
            descriptor,
        })
    }
}

/// Immutable mapping from model identifier to [`ModelEntry`]
#[derive(Debug, Default)]
pub struct ModelCatalog {
    entries: BTreeMap<String, ModelEntry>,
}

impl ModelCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model (builder pattern)
    pub fn with_model(
        mut self,
        model_id: impl Into<String>,
        name: impl Into<String>,
        descriptor: ModelDescriptor,
    ) -> Self {
        self.entries.insert(
            model_id.into(),
            ModelEntry {
                name: name.into(),
                descriptor,
            },
        );
        self
    }

    /// The four models the relay ships with
    pub fn builtin(credentials: BuiltinCredentials) -> Self {
        let BuiltinCredentials {
            huggingface_token,
            openrouter_key,
            gemini_api_key,
        } = credentials;

        Self::new()
            .with_model(
                "open_llama",
                "Open LLaMA",
                ModelDescriptor::HuggingFace {
                    url: HUGGINGFACE_OPEN_LLAMA_URL.to_string(),
                    token: huggingface_token,
                },
            )
            .with_model(
                "mistral",
                "Mistral",
                ModelDescriptor::OpenRouter {
                    url: OPENROUTER_CHAT_URL.to_string(),
                    token: SecretString::from(openrouter_key.expose_secret().to_string()),
                    model: "mistralai/mistral-7b-instruct:free".to_string(),
                },
            )
            .with_model(
                "deepseek_llama70b",
                "Deepseek LLaMA 70B",
                ModelDescriptor::OpenRouter {
                    url: OPENROUTER_CHAT_URL.to_string(),
                    token: openrouter_key,
                    model: "deepseek/deepseek-r1-distill-llama-70b:free".to_string(),
                },
            )
            .with_model(
                "gemini_flash",
                "Gemini Flash",
                ModelDescriptor::Google {
                    url: GEMINI_FLASH_URL.to_string(),
                    api_key: gemini_api_key,
                },
            )
    }

    /// Parse a catalog from TOML
    ///
    /// ```toml
    /// [models.mistral]
    /// type = "openrouter"
    /// url = "https://openrouter.ai/api/v1/chat/completions"
    /// model = "mistralai/mistral-7b-instruct:free"
    /// token = "sk-or-..."
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ProviderError> {
        let file: CatalogFile = toml::from_str(source)
            .map_err(|e| ProviderError::Configuration(format!("invalid model catalog: {e}")))?;

        let mut entries = BTreeMap::new();
        for (model_id, raw) in file.models {
            let entry = raw.into_entry(&model_id)?;
            entries.insert(model_id, entry);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, model_id: &str) -> Option<&ModelEntry> {
        self.entries.get(model_id)
    }

    /// Iterate entries in model-identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
