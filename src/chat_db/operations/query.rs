use sqlx::{Row, SqlitePool};

use crate::chat_db::{
    error::Result,
    types::{turn::parse_timestamp, SessionSummary},
};

/// List every session that still has turns, most recently active first
///
/// Sessions whose newest turns share a timestamp are ordered by the newer
/// turn id.
pub async fn list_sessions(pool: &SqlitePool) -> Result<Vec<SessionSummary>> {
    let rows = sqlx::query(
        "SELECT session_id, MAX(timestamp) AS last_time, MAX(id) AS last_id \
         FROM chat \
         GROUP BY session_id \
         ORDER BY last_time DESC, last_id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<SessionSummary> {
            let last_time: String = row.try_get("last_time")?;
            Ok(SessionSummary {
                session_id: row.try_get("session_id")?,
                last_timestamp: parse_timestamp(&last_time)?,
            })
        })
        .collect()
}

/// Round-trip a trivial statement to check the database is reachable
pub async fn ping(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
