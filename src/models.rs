// HTTP request and response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::chat_db::{ChatRole, ChatTurn, SessionSummary};
use crate::llm::ModelCatalog;

pub const DEFAULT_MODEL: &str = "open_llama";
pub const DEFAULT_SESSION: &str = "default";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_session() -> String {
    DEFAULT_SESSION.to_string()
}

// Request Types
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_session", alias = "session_id")]
    pub session_id: String,
}

/// Query string of `GET /chat/history`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    #[serde(default = "default_session", alias = "session_id")]
    pub session_id: String,
}

/// Query string of `DELETE /chat/clear`; the session id is required
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearQuery {
    #[serde(alias = "session_id")]
    pub session_id: String,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub role: ChatRole,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatTurn> for HistoryEntry {
    fn from(turn: ChatTurn) -> Self {
        Self {
            role: turn.role,
            message: turn.message,
            timestamp: turn.timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    pub status: String,
    pub session_id: String,
    pub deleted_messages: u64,
}

impl ClearResponse {
    pub fn cleared(session_id: impl Into<String>, deleted_messages: u64) -> Self {
        Self {
            status: "cleared".to_string(),
            session_id: session_id.into(),
            deleted_messages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    pub session_id: String,
    pub last_time: DateTime<Utc>,
}

impl From<SessionSummary> for SessionEntry {
    fn from(summary: SessionSummary) -> Self {
        Self {
            session_id: summary.session_id,
            last_time: summary.last_timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionEntry>,
}

/// Public view of one configured model; never carries credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    /// Upstream model name, for openrouter-style entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: BTreeMap<String, ModelInfo>,
}

impl ModelsResponse {
    pub fn from_catalog(catalog: &ModelCatalog) -> Self {
        let models = catalog
            .iter()
            .map(|(id, entry)| {
                (
                    id.to_string(),
                    ModelInfo {
                        kind: entry.descriptor.kind().as_str().to_string(),
                        name: entry.name.clone(),
                        model: entry.descriptor.target_model().map(str::to_string),
                    },
                )
            })
            .collect();
        Self { models }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every error reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
