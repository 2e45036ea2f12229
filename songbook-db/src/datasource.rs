//! Connection ownership and the read queries run over it.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, Params, Row};
use songbook_catalog::{Artist, SongArtist, SortOrder};
use thiserror::Error;

use crate::sql::{self, COLUMN_ARTIST_ID, COLUMN_ARTIST_NAME};

/// Default database file name.
pub const DB_NAME: &str = "music.db";

#[derive(Debug, Error)]
pub enum DatasourceError {
    #[error("Couldn't connect to database {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Query failed: {0}")]
    Query(String),
}

impl DatasourceError {
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }
}

impl From<rusqlite::Error> for DatasourceError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Query(e.to_string())
    }
}

/// Owner of the single database connection.
///
/// Every query prepares its statement, drains the rows and drops the
/// statement before returning, so the connection is free for the next call
/// on every exit path.
#[derive(Debug, Default)]
pub struct Datasource {
    conn: Option<Connection>,
}

impl Datasource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or create) the database file at `path`.
    ///
    /// An already open connection is closed first.
    pub fn open(&mut self, path: &Path) -> Result<(), DatasourceError> {
        self.close();
        match Connection::open(path) {
            Ok(conn) => {
                log::debug!("Opened database {}", path.display());
                self.conn = Some(conn);
                Ok(())
            }
            Err(source) => {
                log::error!("Couldn't connect to database: {}", source);
                Err(DatasourceError::Connection {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Open a private in-memory database.
    pub fn open_in_memory(&mut self) -> Result<(), DatasourceError> {
        self.close();
        let conn = Connection::open_in_memory().map_err(|source| {
            log::error!("Couldn't connect to database: {}", source);
            DatasourceError::Connection {
                path: PathBuf::from(":memory:"),
                source,
            }
        })?;
        self.conn = Some(conn);
        Ok(())
    }

    /// Release the connection. Safe to call when nothing is open.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                log::warn!("Couldn't close connection: {}", e);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Borrow the underlying connection, if open.
    pub fn connection(&self) -> Option<&Connection> {
        self.conn.as_ref()
    }

    /// Create the `artists`/`albums`/`songs` tables if missing.
    pub fn create_schema(&self) -> Result<(), DatasourceError> {
        crate::schema::create_music_schema(self.conn()?).inspect_err(|e| {
            log::error!("{}", e);
        })
    }

    fn conn(&self) -> Result<&Connection, DatasourceError> {
        self.conn
            .as_ref()
            .ok_or_else(|| DatasourceError::query("no open connection"))
    }

    // ── Artist Queries ──────────────────────────────────────────────────────

    /// List every artist, optionally ordered by name.
    pub fn query_artists(&self, order: SortOrder) -> Result<Vec<Artist>, DatasourceError> {
        let sql = sql::with_order(sql::QUERY_ARTISTS, sql::ARTISTS_ORDER_KEYS, order);
        self.query_rows(&sql, [], |row| {
            Ok(Artist {
                id: row.get(COLUMN_ARTIST_ID)?,
                name: row.get(COLUMN_ARTIST_NAME)?,
            })
        })
    }

    /// Album names whose artist is named exactly `artist_name`.
    pub fn query_albums_for_artist(
        &self,
        artist_name: &str,
        order: SortOrder,
    ) -> Result<Vec<String>, DatasourceError> {
        let sql = sql::with_order(sql::QUERY_ALBUMS_BY_ARTIST, sql::ALBUMS_ORDER_KEYS, order);
        self.query_rows(&sql, params![artist_name], |row| row.get(0))
    }

    /// Every artist/album/track combination for songs titled exactly `song_title`.
    pub fn query_artists_for_song(
        &self,
        song_title: &str,
        order: SortOrder,
    ) -> Result<Vec<SongArtist>, DatasourceError> {
        let sql = sql::with_order(
            sql::QUERY_ARTISTS_FOR_SONG,
            sql::SONG_ARTISTS_ORDER_KEYS,
            order,
        );
        self.query_rows(&sql, params![song_title], row_to_song_artist)
    }

    // ── Counting and Metadata ───────────────────────────────────────────────

    /// Number of rows in `table`.
    pub fn count(&self, table: &str) -> Result<i64, DatasourceError> {
        let conn = self.conn()?;
        let Some(sql) = sql::count_query(table) else {
            log::error!("Query failed: invalid table name '{}'", table);
            return Err(DatasourceError::query(format!(
                "invalid table name '{table}'"
            )));
        };
        log::debug!("{}", sql);
        logged(conn.query_row(&sql, [], |row| row.get(0)))
    }

    /// Column names of the `songs` table, in declaration order.
    pub fn query_song_columns(&self) -> Result<Vec<String>, DatasourceError> {
        let conn = self.conn()?;
        log::debug!("{}", sql::QUERY_SONG_COLUMNS);
        let stmt = logged(conn.prepare(sql::QUERY_SONG_COLUMNS))?;
        let columns = stmt.column_names().into_iter().map(String::from).collect();
        Ok(columns)
    }

    // ── View ────────────────────────────────────────────────────────────────

    /// Create the `artist_list` view. Repeated calls are no-ops.
    pub fn create_view_for_song_artists(&self) -> Result<(), DatasourceError> {
        let conn = self.conn()?;
        log::debug!("{}", sql::CREATE_ARTIST_FOR_SONG_VIEW);
        logged(conn.execute(sql::CREATE_ARTIST_FOR_SONG_VIEW, [])).map(|_| ())
    }

    /// Rows of `artist_list` for songs titled exactly `title`.
    pub fn query_song_info_view(&self, title: &str) -> Result<Vec<SongArtist>, DatasourceError> {
        self.query_rows(sql::QUERY_VIEW_SONG_INFO, params![title], row_to_song_artist)
    }

    fn query_rows<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>, DatasourceError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn()?;
        log::debug!("{}", sql);
        logged(collect_rows(conn, sql, params, f))
    }
}

impl Drop for Datasource {
    fn drop(&mut self) {
        self.close();
    }
}

fn collect_rows<T, P, F>(conn: &Connection, sql: &str, params: P, f: F) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, f)?;
    rows.collect()
}

fn logged<T>(result: rusqlite::Result<T>) -> Result<T, DatasourceError> {
    result.map_err(|e| {
        log::error!("Query failed: {}", e);
        e.into()
    })
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_song_artist(row: &Row<'_>) -> rusqlite::Result<SongArtist> {
    Ok(SongArtist {
        artist_name: row.get(0)?,
        album_name: row.get(1)?,
        track: row.get(2)?,
    })
}
