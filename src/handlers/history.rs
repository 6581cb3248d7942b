// GET /chat/history and DELETE /chat/clear handlers

use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;

use super::reply::ApiReply;
use crate::chat::ChatService;
use crate::models::{ClearQuery, ClearResponse, HistoryEntry, HistoryQuery, HistoryResponse};

pub async fn history_handler(
    query: HistoryQuery,
    service: Arc<ChatService>,
) -> Result<ApiReply, Infallible> {
    info!(session_id = %query.session_id, "GET /chat/history");

    let reply = match service.history(&query.session_id).await {
        Ok(turns) => ApiReply::ok(&HistoryResponse {
            history: turns.into_iter().map(HistoryEntry::from).collect(),
            session_id: query.session_id,
        }),
        Err(e) => {
            error!(session_id = %query.session_id, "failed to load history: {}", e);
            ApiReply::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    Ok(reply)
}

pub async fn clear_handler(
    query: ClearQuery,
    service: Arc<ChatService>,
) -> Result<ApiReply, Infallible> {
    info!(session_id = %query.session_id, "DELETE /chat/clear");

    let reply = match service.clear(&query.session_id).await {
        Ok(deleted) => ApiReply::ok(&ClearResponse::cleared(query.session_id, deleted)),
        Err(e) => {
            error!(session_id = %query.session_id, "failed to clear session: {}", e);
            ApiReply::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    Ok(reply)
}
