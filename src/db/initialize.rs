use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the store schema if missing: the `kv` table holding the durable
/// keys, and the `audit` table for diagnostic rows.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS audit (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             timestamp TEXT NOT NULL,
             action    TEXT NOT NULL,
             message   TEXT NOT NULL
         );",
    )?;
    Ok(())
}
