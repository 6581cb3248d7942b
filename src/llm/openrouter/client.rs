//! OpenRouter chat-completion client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::llm::core::{config::GenerationConfig, error::ProviderError, provider::LlmProvider};
use crate::llm::http::send_json;

use super::mapper::{from_chat_response, to_chat_request};

/// Client for an OpenRouter-compatible chat-completion endpoint
pub struct OpenRouterClient {
    http_client: Client,
    url: String,
    token: SecretString,
    /// Upstream model name sent in every request
    model: String,
    config: GenerationConfig,
}

impl OpenRouterClient {
    pub fn new(
        http_client: Client,
        url: impl Into<String>,
        token: SecretString,
        model: impl Into<String>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            http_client,
            url: url.into(),
            token,
            model: model.into(),
            config,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenRouterClient {
    async fn generate_reply(&self, user_text: &str) -> Result<String, ProviderError> {
        let request = to_chat_request(&self.model, user_text, &self.config);
        debug!(url = %self.url, model = %self.model, "calling openrouter chat completion");

        let response = send_json(
            self.http_client
                .post(&self.url)
                .bearer_auth(self.token.expose_secret())
                .header("Content-Type", "application/json")
                .json(&request),
        )
        .await?;

        from_chat_response(response)
    }
}
