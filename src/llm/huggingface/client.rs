//! Hugging Face inference client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::llm::core::{config::GenerationConfig, error::ProviderError, provider::LlmProvider};
use crate::llm::http::send_json;

use super::mapper::{from_inference_response, to_inference_request};

/// Client for one Hugging Face inference endpoint
pub struct HuggingFaceClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Full model endpoint URL
    url: String,
    /// Bearer token
    token: SecretString,
    config: GenerationConfig,
}

impl HuggingFaceClient {
    pub fn new(
        http_client: Client,
        url: impl Into<String>,
        token: SecretString,
        config: GenerationConfig,
    ) -> Self {
        Self {
            http_client,
            url: url.into(),
            token,
            config,
        }
    }
}

#[async_trait]
impl LlmProvider for HuggingFaceClient {
    async fn generate_reply(&self, user_text: &str) -> Result<String, ProviderError> {
        let request = to_inference_request(user_text, &self.config);
        debug!(url = %self.url, "calling huggingface inference");

        let response = send_json(
            self.http_client
                .post(&self.url)
                .bearer_auth(self.token.expose_secret())
                .json(&request),
        )
        .await?;

        from_inference_response(response, user_text)
    }
}
