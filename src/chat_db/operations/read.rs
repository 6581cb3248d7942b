use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::chat_db::{
    error::Result,
    types::{turn::parse_timestamp, ChatTurn},
};

/// Retrieve all turns of a session in insertion order
///
/// An unknown session yields an empty vector.
pub async fn get_session_turns(pool: &SqlitePool, session_id: &str) -> Result<Vec<ChatTurn>> {
    let rows = sqlx::query(
        "SELECT id, session_id, role, message, timestamp \
         FROM chat \
         WHERE session_id = ?1 \
         ORDER BY id ASC",
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_turn).collect()
}

fn row_to_turn(row: &SqliteRow) -> Result<ChatTurn> {
    let role: String = row.try_get("role")?;
    let timestamp: String = row.try_get("timestamp")?;

    Ok(ChatTurn {
        id: row.try_get("id")?,
        session_id: row.try_get("session_id")?,
        role: role.parse()?,
        message: row.try_get("message")?,
        timestamp: parse_timestamp(&timestamp)?,
    })
}
