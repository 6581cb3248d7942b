use async_trait::async_trait;

use crate::chat_db::{
    error::Result,
    types::{ChatTurn, NewChatTurn, SessionSummary},
};

/// Session-scoped chat history storage
///
/// Implemented by [`ChatDbClient`](crate::chat_db::ChatDbClient); the chat
/// service depends on this trait only.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Insert one turn; the store assigns `id` and `timestamp`
    async fn append(&self, turn: NewChatTurn) -> Result<ChatTurn>;

    /// All turns of a session in ascending `id` order; empty if unknown
    async fn list_ordered(&self, session_id: &str) -> Result<Vec<ChatTurn>>;

    /// Remove all turns of a session and return how many were removed
    async fn delete_all(&self, session_id: &str) -> Result<u64>;

    /// One row per session, most recently active first
    async fn list_sessions(&self) -> Result<Vec<SessionSummary>>;
}
