//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::llm::core::{error::ProviderError, provider::LlmProvider};
use crate::llm::http::send_json;

use super::mapper::{from_gemini_response, to_gemini_request};

/// Client for a Gemini `generateContent` endpoint
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Endpoint URL, without the key parameter
    url: String,
    /// API key, sent as the `key` query parameter
    api_key: SecretString,
}

impl GeminiClient {
    pub fn new(http_client: Client, url: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            http_client,
            url: url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate_reply(&self, user_text: &str) -> Result<String, ProviderError> {
        let request = to_gemini_request(user_text);
        debug!(url = %self.url, "calling gemini generateContent");

        let response = send_json(
            self.http_client
                .post(&self.url)
                .query(&[("key", self.api_key.expose_secret())])
                .header("Content-Type", "application/json")
                .json(&request),
        )
        .await?;

        from_gemini_response(response)
    }
}
