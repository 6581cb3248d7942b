//! Shared outbound HTTP plumbing for all providers

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::llm::core::error::{ProviderError, UpstreamCause};

/// Default bound on every outbound provider call
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client used for every provider call
///
/// The timeout covers the whole request, from connect to the last body byte.
pub fn build_http_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(5).min(timeout))
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Configuration(format!("Failed to create HTTP client: {}", e)))
}

/// Send a prepared request and decode the reply body as JSON
///
/// A non-2xx reply whose JSON body carries an `error` field is a
/// vendor-reported error; any other non-2xx reply becomes an
/// [`UpstreamCause::Status`] error carrying the body. A 2xx body that is not
/// JSON is an invalid shape.
pub async fn send_json(request: RequestBuilder) -> Result<Value, ProviderError> {
    let response = request.send().await?;

    let status = response.status();
    let body = response.text().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "upstream replied");

    if !status.is_success() {
        let reported = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| value.get("error").cloned());
        if let Some(error) = reported {
            return Err(ProviderError::reported(&error));
        }
        return Err(ProviderError::Upstream {
            cause: UpstreamCause::Status(status.as_u16()),
            detail: format!("HTTP {}: {}", status.as_u16(), body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}
