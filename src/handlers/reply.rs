// JSON replies and rejection recovery shared by all handlers

use serde::Serialize;
use serde_json::Value;
use std::convert::Infallible;
use tracing::{error, warn};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::chat::ChatError;
use crate::llm::{ProviderError, UpstreamCause};
use crate::models::ErrorResponse;

/// A JSON body with a status code
#[derive(Debug, Clone)]
pub struct ApiReply {
    status: StatusCode,
    body: Value,
}

impl ApiReply {
    /// 200 with `body` serialized as JSON
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                status: StatusCode::OK,
                body,
            },
            Err(e) => {
                error!("failed to serialize response body: {}", e);
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }

    /// `{"error": message}` with the given status
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        let body = ErrorResponse {
            error: message.into(),
        };
        Self {
            status,
            body: serde_json::json!(body),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

impl Reply for ApiReply {
    fn into_response(self) -> warp::reply::Response {
        warp::reply::with_status(warp::reply::json(&self.body), self.status).into_response()
    }
}

/// Status code for a failed chat request
pub fn chat_error_status(err: &ChatError) -> StatusCode {
    match err {
        ChatError::UnknownModel(_) => StatusCode::BAD_REQUEST,
        ChatError::Provider(provider) => provider_error_status(provider),
    }
}

fn provider_error_status(err: &ProviderError) -> StatusCode {
    match err {
        ProviderError::Configuration(_) | ProviderError::UnsupportedProvider(_) => {
            StatusCode::BAD_REQUEST
        }
        ProviderError::Upstream { cause, .. } => match cause {
            UpstreamCause::Reported => StatusCode::BAD_REQUEST,
            UpstreamCause::Timeout => StatusCode::GATEWAY_TIMEOUT,
            UpstreamCause::Status(_) | UpstreamCause::Transport => StatusCode::BAD_GATEWAY,
        },
        ProviderError::InvalidUpstreamShape(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turn warp rejections into JSON error replies
pub async fn handle_rejection(err: Rejection) -> Result<ApiReply, Infallible> {
    let reply = if err.is_not_found() {
        ApiReply::error(StatusCode::NOT_FOUND, "Not found")
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        ApiReply::error(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e))
    } else if let Some(e) = err.find::<warp::reject::InvalidQuery>() {
        ApiReply::error(StatusCode::BAD_REQUEST, format!("Invalid query: {}", e))
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ApiReply::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        ApiReply::error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Request body must be application/json",
        )
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        ApiReply::error(StatusCode::LENGTH_REQUIRED, "Content-Length required")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        ApiReply::error(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else {
        warn!("unhandled rejection: {:?}", err);
        ApiReply::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };
    Ok(reply)
}
