//! Internal diagnostic log, kept inside the store itself.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append a diagnostic row. Failures here must never block the caller's
/// actual operation; callers decide whether to surface the error.
pub fn audit(conn: &Connection, action: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO audit (timestamp, action, message) VALUES (?1, ?2, ?3)",
        params![Local::now().to_rfc3339(), action, message],
    )?;
    Ok(())
}

/// Load all diagnostic rows, newest first: (timestamp, action, message).
pub fn load_audit(conn: &Connection) -> AppResult<Vec<(String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT timestamp, action, message FROM audit ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
