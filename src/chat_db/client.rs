use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::chat_db::{
    connection::ChatDbConfig,
    error::Result,
    operations,
    store::ChatStore,
    types::{ChatTurn, NewChatTurn, SessionSummary},
};

/// SQLite-backed chat store
#[derive(Clone)]
pub struct ChatDbClient {
    pool: SqlitePool,
}

impl ChatDbClient {
    /// Create a new chat store client from configuration
    ///
    /// Creates the database file if needed and applies pending migrations.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chat_relay::chat_db::{ChatDbClient, ChatDbConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = ChatDbConfig::from_url("sqlite://chat_history.db")?;
    ///     let client = ChatDbClient::new(config).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(config: ChatDbConfig) -> Result<Self> {
        let pool = config.build_pool()?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!(url = %config.database_url, "chat store ready");

        Ok(Self { pool })
    }

    /// Check that the database is reachable
    pub async fn ping(&self) -> Result<()> {
        operations::ping(&self.pool).await
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ChatStore for ChatDbClient {
    async fn append(&self, turn: NewChatTurn) -> Result<ChatTurn> {
        operations::append_turn(&self.pool, turn).await
    }

    async fn list_ordered(&self, session_id: &str) -> Result<Vec<ChatTurn>> {
        operations::get_session_turns(&self.pool, session_id).await
    }

    async fn delete_all(&self, session_id: &str) -> Result<u64> {
        operations::delete_session_turns(&self.pool, session_id).await
    }

    async fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        operations::list_sessions(&self.pool).await
    }
}
