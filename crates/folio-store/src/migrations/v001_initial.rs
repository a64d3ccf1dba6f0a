//! v001 -- Initial schema creation.
//!
//! A single `documents` table holds every collection. Insertion order
//! (`seq`) is the store order that list reads return.

use rusqlite::Connection;

const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    seq        INTEGER PRIMARY KEY AUTOINCREMENT,
    id         TEXT NOT NULL,
    collection TEXT NOT NULL,
    body       TEXT NOT NULL,                 -- JSON object, without `_id`
    created_at TEXT NOT NULL,                 -- RFC-3339

    UNIQUE (collection, id)
);

CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents (collection, seq);
"#;

pub fn up(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(UP_SQL)
}
