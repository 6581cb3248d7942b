//! The chat endpoint orchestrator
//!
//! A chat request runs three independent steps: store the user turn, call the
//! provider, store the AI turn. Storage is best-effort: a failed write is
//! logged and the request carries on. A provider failure ends the request and
//! no AI turn is written.

use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::chat_db::{self, ChatStore, ChatTurn, NewChatTurn, SessionSummary};
use crate::llm::{generate_reply, ModelCatalog, ProviderSettings};

use super::error::ChatError;

/// Result of a successful chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply_text: String,
    pub model_id: String,
    pub session_id: String,
}

/// Orchestrates chat requests and the history queries over one store
#[derive(Clone)]
pub struct ChatService {
    catalog: Arc<ModelCatalog>,
    store: Arc<dyn ChatStore>,
    http_client: Client,
    settings: ProviderSettings,
}

impl ChatService {
    pub fn new(
        catalog: Arc<ModelCatalog>,
        store: Arc<dyn ChatStore>,
        http_client: Client,
        settings: ProviderSettings,
    ) -> Self {
        Self {
            catalog,
            store,
            http_client,
            settings,
        }
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    /// Handle one chat message
    ///
    /// # Errors
    ///
    /// * `ChatError::UnknownModel` - `model_id` is not configured; nothing is stored
    /// * `ChatError::Provider` - the provider call failed; only the user turn is stored
    pub async fn handle_chat(
        &self,
        session_id: &str,
        model_id: &str,
        user_text: &str,
    ) -> Result<ChatReply, ChatError> {
        let entry = self
            .catalog
            .get(model_id)
            .ok_or_else(|| ChatError::UnknownModel(model_id.to_string()))?;

        best_effort(
            self.store
                .append(NewChatTurn::user(session_id, user_text))
                .await,
            session_id,
        );

        let reply_text = generate_reply(
            &entry.descriptor,
            &self.http_client,
            &self.settings,
            user_text,
        )
        .await
        .map_err(|e| {
            error!(
                session_id,
                model_id,
                provider = %entry.descriptor.kind(),
                kind = e.kind(),
                "provider call failed: {}",
                e
            );
            e
        })?;

        best_effort(
            self.store
                .append(NewChatTurn::ai(session_id, reply_text.as_str()))
                .await,
            session_id,
        );

        info!(session_id, model_id, reply_len = reply_text.len(), "chat reply sent");

        Ok(ChatReply {
            reply_text,
            model_id: model_id.to_string(),
            session_id: session_id.to_string(),
        })
    }

    /// All turns of a session, oldest first
    pub async fn history(&self, session_id: &str) -> chat_db::Result<Vec<ChatTurn>> {
        self.store.list_ordered(session_id).await
    }

    /// Delete a session; returns the number of turns removed
    pub async fn clear(&self, session_id: &str) -> chat_db::Result<u64> {
        let deleted = self.store.delete_all(session_id).await?;
        info!(session_id, deleted, "session cleared");
        Ok(deleted)
    }

    /// Every session with at least one turn, most recently active first
    pub async fn sessions(&self) -> chat_db::Result<Vec<SessionSummary>> {
        self.store.list_sessions().await
    }
}

/// Log and discard a failed turn write
fn best_effort(result: chat_db::Result<ChatTurn>, session_id: &str) -> Option<ChatTurn> {
    match result {
        Ok(turn) => Some(turn),
        Err(e) => {
            warn!(session_id, "failed to persist chat turn: {}", e);
            None
        }
    }
}
