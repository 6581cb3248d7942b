use sqlx::{Row, SqlitePool};

use crate::chat_db::{
    error::Result,
    types::{turn::parse_timestamp, ChatTurn, NewChatTurn},
};

/// Append one turn to its session
///
/// # Behavior
///
/// 1. **Identity**: the store assigns `id` (monotonically increasing)
/// 2. **Timestamp**: the database sets `timestamp` to the insertion time (UTC, ms)
/// 3. **Verbatim**: `session_id` and `message` are stored exactly as given;
///    the session id is opaque, the empty string included
///
/// # Errors
///
/// * `Error::DatabaseError` - For database connection or SQL errors
pub async fn append_turn(pool: &SqlitePool, turn: NewChatTurn) -> Result<ChatTurn> {
    let row = sqlx::query(
        "INSERT INTO chat (session_id, role, message) VALUES (?1, ?2, ?3) \
         RETURNING id, timestamp",
    )
    .bind(&turn.session_id)
    .bind(turn.role.as_str())
    .bind(&turn.message)
    .fetch_one(pool)
    .await?;

    let id: i64 = row.try_get("id")?;
    let timestamp: String = row.try_get("timestamp")?;

    Ok(ChatTurn {
        id,
        session_id: turn.session_id,
        role: turn.role,
        message: turn.message,
        timestamp: parse_timestamp(&timestamp)?,
    })
}

/// Delete every turn of a session
///
/// Returns the number of turns removed; 0 for an unknown session.
pub async fn delete_session_turns(pool: &SqlitePool, session_id: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM chat WHERE session_id = ?1")
        .bind(session_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
