//! Chat history store
//!
//! A single append-only SQLite table of chat turns, scoped by session id.
//!
//! # Quick Start
//!
//! ```no_run
//! use chat_relay::chat_db::{ChatDbClient, ChatDbConfig, ChatStore, NewChatTurn};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChatDbClient::new(ChatDbConfig::default()).await?;
//!
//!     client.append(NewChatTurn::user("default", "Hello")).await?;
//!     let history = client.list_ordered("default").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod connection;
pub mod error;
pub mod operations;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use client::ChatDbClient;
pub use connection::ChatDbConfig;
pub use error::{Error, Result};
pub use store::ChatStore;
pub use types::{ChatRole, ChatTurn, NewChatTurn, SessionSummary};
