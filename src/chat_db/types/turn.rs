use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chat_db::error::Error;

/// Storage format of the `timestamp` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Who wrote a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Ai => "ai",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatRole::User),
            "ai" => Ok(ChatRole::Ai),
            other => Err(Error::DecodeError(format!("unknown chat role '{}'", other))),
        }
    }
}

/// Turn data for appending to the store
///
/// `id` and `timestamp` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChatTurn {
    pub session_id: String,
    pub role: ChatRole,
    pub message: String,
}

impl NewChatTurn {
    pub fn new(session_id: impl Into<String>, role: ChatRole, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            role,
            message: message.into(),
        }
    }

    pub fn user(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(session_id, ChatRole::User, message)
    }

    pub fn ai(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(session_id, ChatRole::Ai, message)
    }
}

/// A stored turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Surrogate key; increases monotonically across the whole table
    pub id: i64,
    pub session_id: String,
    pub role: ChatRole,
    /// Stored verbatim
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// One row of the session listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    /// Timestamp of the newest turn in the session
    pub last_timestamp: DateTime<Utc>,
}

/// Parse a `timestamp` column value (UTC)
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, Error> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::DecodeError(format!("invalid timestamp '{}': {}", value, e)))
}
