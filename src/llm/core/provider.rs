//! Provider trait and factory

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::{config::ProviderSettings, descriptor::ModelDescriptor, error::ProviderError};
use crate::llm::gemini::GeminiClient;
use crate::llm::huggingface::HuggingFaceClient;
use crate::llm::openrouter::OpenRouterClient;

/// Reply text used when a provider answered without any usable content
pub const NO_RESPONSE_PLACEHOLDER: &str = "⚠️ No response.";

/// Main interface that all provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one user message upstream and return the normalized reply text
    ///
    /// Providers never retry; a failed call surfaces immediately.
    async fn generate_reply(&self, user_text: &str) -> Result<String, ProviderError>;
}

/// Create the provider client for a model descriptor
///
/// The credential is checked here, so a missing or placeholder credential
/// fails with [`ProviderError::Configuration`] before any request is built.
///
/// # Arguments
///
/// * `descriptor` - Which provider family and endpoint to use
/// * `http_client` - Shared client carrying the outbound timeout
/// * `settings` - Generation parameters and the placeholder sentinel
pub fn create_provider(
    descriptor: &ModelDescriptor,
    http_client: &Client,
    settings: &ProviderSettings,
) -> Result<Box<dyn LlmProvider>, ProviderError> {
    descriptor.check_credential(&settings.placeholder_sentinel)?;

    let provider: Box<dyn LlmProvider> = match descriptor {
        ModelDescriptor::HuggingFace { url, token } => Box::new(HuggingFaceClient::new(
            http_client.clone(),
            url.clone(),
            copy_secret(token),
            settings.generation.clone(),
        )),
        ModelDescriptor::OpenRouter { url, token, model } => Box::new(OpenRouterClient::new(
            http_client.clone(),
            url.clone(),
            copy_secret(token),
            model.clone(),
            settings.generation.clone(),
        )),
        ModelDescriptor::Google { url, api_key } => Box::new(GeminiClient::new(
            http_client.clone(),
            url.clone(),
            copy_secret(api_key),
        )),
    };
    Ok(provider)
}

/// Resolve the provider for `descriptor` and ask it for a reply in one step
pub async fn generate_reply(
    descriptor: &ModelDescriptor,
    http_client: &Client,
    settings: &ProviderSettings,
    user_text: &str,
) -> Result<String, ProviderError> {
    let provider = create_provider(descriptor, http_client, settings)?;
    provider.generate_reply(user_text).await
}

fn copy_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_string())
}
