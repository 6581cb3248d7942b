//! Process configuration, read once at start-up from the environment
//!
//! A `.env` file in the working directory is loaded first when present.

use secrecy::SecretString;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::chat_db::ChatDbConfig;
use crate::llm::core::config::DEFAULT_PLACEHOLDER_SENTINEL;
use crate::llm::http::DEFAULT_UPSTREAM_TIMEOUT;
use crate::llm::{BuiltinCredentials, GenerationConfig, ModelCatalog, ProviderError, ProviderSettings};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("failed to read model catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model catalog: {0}")]
    Catalog(#[from] ProviderError),

    #[error(transparent)]
    Store(#[from] crate::chat_db::Error),
}

/// Everything the server needs to start
#[derive(Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Bound on every outbound provider call
    pub upstream_timeout: Duration,
    /// Optional TOML model catalog replacing the built-in one
    pub models_file: Option<PathBuf>,
    pub placeholder_sentinel: String,
    pub credentials: BuiltinCredentials,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: crate::chat_db::connection::DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: 4,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            models_file: None,
            placeholder_sentinel: DEFAULT_PLACEHOLDER_SENTINEL.to_string(),
            credentials: BuiltinCredentials::default(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    ///
    /// Unset variables keep their defaults; set-but-invalid ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("RELAY_BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    name: "RELAY_BIND_ADDR",
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(url) = lookup("RELAY_DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(max) = lookup("RELAY_DB_MAX_CONNECTIONS") {
            config.db_max_connections = parse_number("RELAY_DB_MAX_CONNECTIONS", &max)?;
        }
        if let Some(secs) = lookup("RELAY_UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = parse_number("RELAY_UPSTREAM_TIMEOUT_SECS", &secs)?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    name: "RELAY_UPSTREAM_TIMEOUT_SECS",
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.upstream_timeout = Duration::from_secs(secs);
        }
        config.models_file = lookup("RELAY_MODELS_FILE").map(PathBuf::from);
        if let Some(sentinel) = lookup("RELAY_PLACEHOLDER_SENTINEL") {
            config.placeholder_sentinel = sentinel;
        }

        if let Some(token) = lookup("HF_TOKEN") {
            config.credentials.huggingface_token = SecretString::from(token);
        }
        if let Some(key) = lookup("OPENROUTER_API_KEY") {
            config.credentials.openrouter_key = SecretString::from(key);
        }
        if let Some(key) = lookup("GEMINI_API_KEY") {
            config.credentials.gemini_api_key = SecretString::from(key);
        }

        Ok(config)
    }

    /// Store connection settings
    pub fn chat_db_config(&self) -> Result<ChatDbConfig, ConfigError> {
        Ok(ChatDbConfig::from_url(&self.database_url)?.with_max_connections(self.db_max_connections))
    }

    /// Adapter settings shared by every provider call
    pub fn provider_settings(&self) -> ProviderSettings {
        ProviderSettings {
            generation: GenerationConfig::default(),
            placeholder_sentinel: self.placeholder_sentinel.clone(),
        }
    }

    /// Build the model catalog: the TOML file when configured, else the built-in models
    ///
    /// Consumes the built-in credentials.
    pub fn load_catalog(&mut self) -> Result<ModelCatalog, ConfigError> {
        match &self.models_file {
            Some(path) => {
                let source =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
                        path: path.clone(),
                        source,
                    })?;
                Ok(ModelCatalog::from_toml_str(&source)?)
            }
            None => Ok(ModelCatalog::builtin(std::mem::take(&mut self.credentials))),
        }
    }
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        })
}
