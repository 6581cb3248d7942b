// GET /models and GET /health handlers

use std::convert::Infallible;
use std::sync::Arc;

use super::reply::ApiReply;
use crate::chat::ChatService;
use crate::models::{HealthResponse, ModelsResponse};

pub async fn models_handler(service: Arc<ChatService>) -> Result<ApiReply, Infallible> {
    Ok(ApiReply::ok(&ModelsResponse::from_catalog(service.catalog())))
}

pub async fn health_handler() -> Result<ApiReply, Infallible> {
    Ok(ApiReply::ok(&HealthResponse {
        status: "ok".to_string(),
    }))
}
