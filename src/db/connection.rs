use std::path::Path;

use rusqlite::{Connection, Result};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL,
    category TEXT NOT NULL,
    amount TEXT NOT NULL,
    date TEXT NOT NULL
)";

pub fn open(path: &Path) -> Result<Connection> {
    Connection::open(path)
}

/// Creates the transactions table if it is missing. Existing rows are
/// left untouched, so this is safe to run on every startup.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(SCHEMA, [])?;
    Ok(())
}
