//! Generation configuration parameters

/// Parameters shared by every outbound generation request
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature, sent to providers that accept one
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 100,
            temperature: 0.7,
        }
    }
}

/// Adapter-wide settings, fixed at start-up
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Generation parameters sent with every request
    pub generation: GenerationConfig,
    /// Credentials containing this substring are treated as unset
    pub placeholder_sentinel: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            placeholder_sentinel: DEFAULT_PLACEHOLDER_SENTINEL.to_string(),
        }
    }
}

/// Marker used by the sample credentials (`YOUR_HF_TOKEN`, ...)
pub const DEFAULT_PLACEHOLDER_SENTINEL: &str = "YOUR_";
