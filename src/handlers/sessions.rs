// GET /chat/sessions handler

use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;

use super::reply::ApiReply;
use crate::chat::ChatService;
use crate::models::{SessionEntry, SessionsResponse};

pub async fn sessions_handler(service: Arc<ChatService>) -> Result<ApiReply, Infallible> {
    info!("GET /chat/sessions");

    let reply = match service.sessions().await {
        Ok(sessions) => ApiReply::ok(&SessionsResponse {
            sessions: sessions.into_iter().map(SessionEntry::from).collect(),
        }),
        Err(e) => {
            error!("failed to list sessions: {}", e);
            ApiReply::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    Ok(reply)
}
