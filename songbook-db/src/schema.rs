//! SQLite schema for the music catalog tables.
//!
//! The catalog normally arrives as an existing file; this only bootstraps an
//! empty one with the same table and column names.

use rusqlite::Connection;

use crate::datasource::DatasourceError;

/// Create the `artists`, `albums` and `songs` tables if they don't exist.
///
/// This is idempotent, safe to call on an existing database.
pub fn create_music_schema(conn: &Connection) -> Result<(), DatasourceError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS artists (
    _id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS albums (
    _id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    artist INTEGER REFERENCES artists(_id)
);

CREATE TABLE IF NOT EXISTS songs (
    _id INTEGER PRIMARY KEY,
    track INTEGER,
    title TEXT NOT NULL,
    album INTEGER REFERENCES albums(_id)
);
"#;
