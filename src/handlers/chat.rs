// POST /chat handler

use std::convert::Infallible;
use std::sync::Arc;
use tracing::info;

use super::reply::{chat_error_status, ApiReply};
use crate::chat::ChatService;
use crate::models::{ChatRequest, ChatResponse};

pub async fn chat_handler(
    request: ChatRequest,
    service: Arc<ChatService>,
) -> Result<ApiReply, Infallible> {
    info!(
        session_id = %request.session_id,
        model = %request.model,
        "POST /chat"
    );

    let reply = match service
        .handle_chat(&request.session_id, &request.model, &request.message)
        .await
    {
        Ok(reply) => ApiReply::ok(&ChatResponse {
            response: reply.reply_text,
            model: reply.model_id,
            session_id: reply.session_id,
        }),
        Err(e) => ApiReply::error(chat_error_status(&e), e.to_string()),
    };

    Ok(reply)
}
