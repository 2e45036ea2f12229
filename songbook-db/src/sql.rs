//! Table/column names and the query text built from them.
//!
//! Caller-supplied values never appear in the text: filters are bound as
//! `?1`, and ordering clauses are picked from fixed keys.

use songbook_catalog::SortOrder;

// ── Tables and Columns ──────────────────────────────────────────────────────

pub const TABLE_SONGS: &str = "songs";

pub const COLUMN_ARTIST_ID: &str = "_id";
pub const COLUMN_ARTIST_NAME: &str = "name";

// ── Artists ─────────────────────────────────────────────────────────────────

pub const QUERY_ARTISTS: &str = "SELECT * FROM artists";
pub const ARTISTS_ORDER_KEYS: &[&str] = &["artists.name COLLATE NOCASE", "artists._id"];

// ── Albums by Artist ────────────────────────────────────────────────────────

pub const QUERY_ALBUMS_BY_ARTIST: &str = "SELECT albums.name FROM albums \
     INNER JOIN artists ON albums.artist = artists._id \
     WHERE artists.name = ?1";
pub const ALBUMS_ORDER_KEYS: &[&str] = &["albums.name COLLATE NOCASE", "albums._id"];

// ── Artists for Song ────────────────────────────────────────────────────────

pub const QUERY_ARTISTS_FOR_SONG: &str = "SELECT artists.name, albums.name, songs.track FROM songs \
     INNER JOIN albums ON songs.album = albums._id \
     INNER JOIN artists ON albums.artist = artists._id \
     WHERE songs.title = ?1";
pub const SONG_ARTISTS_ORDER_KEYS: &[&str] = &[
    "artists.name COLLATE NOCASE",
    "albums.name COLLATE NOCASE",
    "songs.track",
    "songs._id",
];

// ── View ────────────────────────────────────────────────────────────────────

pub const CREATE_ARTIST_FOR_SONG_VIEW: &str = "CREATE VIEW IF NOT EXISTS artist_list AS \
     SELECT artists.name AS artist, albums.name AS album, songs.track AS track, songs.title AS title \
     FROM songs \
     INNER JOIN albums ON songs.album = albums._id \
     INNER JOIN artists ON albums.artist = artists._id \
     ORDER BY artists.name COLLATE NOCASE, albums.name COLLATE NOCASE, songs.track";

// The view's own ORDER BY does not carry through an outer WHERE.
pub const QUERY_VIEW_SONG_INFO: &str = "SELECT artist, album, track FROM artist_list \
     WHERE title = ?1 \
     ORDER BY artist COLLATE NOCASE, album COLLATE NOCASE, track";

// ── Metadata ────────────────────────────────────────────────────────────────

pub const QUERY_SONG_COLUMNS: &str = "SELECT * FROM songs";

// ── Builders ────────────────────────────────────────────────────────────────

/// Append an `ORDER BY` over `keys` to `base`, every key in the same
/// direction.
///
/// Text keys carry their own `COLLATE NOCASE`; the trailing id keys break
/// ties so that descending is the exact reverse of ascending.
/// `SortOrder::None` returns `base` untouched.
pub fn with_order(base: &str, keys: &[&str], order: SortOrder) -> String {
    match order.keyword() {
        None => base.to_string(),
        Some(direction) => {
            let terms: Vec<String> = keys
                .iter()
                .map(|key| format!("{key} {direction}"))
                .collect();
            format!("{base} ORDER BY {}", terms.join(", "))
        }
    }
}

/// Build `SELECT COUNT(*)` text for `table`.
///
/// Table names cannot be bound as parameters, so anything that is not a
/// plain identifier is refused.
pub fn count_query(table: &str) -> Option<String> {
    is_plain_identifier(table).then(|| format!("SELECT COUNT(*) AS count FROM {table}"))
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_query_has_no_order_clause() {
        assert_eq!(
            with_order(QUERY_ARTISTS, ARTISTS_ORDER_KEYS, SortOrder::None),
            "SELECT * FROM artists"
        );
    }

    #[test]
    fn artists_order_is_case_insensitive() {
        assert_eq!(
            with_order(QUERY_ARTISTS, ARTISTS_ORDER_KEYS, SortOrder::Descending),
            "SELECT * FROM artists ORDER BY artists.name COLLATE NOCASE DESC, artists._id DESC"
        );
    }

    #[test]
    fn song_artists_order_covers_every_key() {
        let sql = with_order(
            QUERY_ARTISTS_FOR_SONG,
            SONG_ARTISTS_ORDER_KEYS,
            SortOrder::Ascending,
        );
        assert!(sql.ends_with(
            "ORDER BY artists.name COLLATE NOCASE ASC, albums.name COLLATE NOCASE ASC, \
             songs.track ASC, songs._id ASC"
        ));
        assert!(sql.contains("WHERE songs.title = ?1"));
    }

    #[test]
    fn view_query_orders_case_insensitively() {
        assert!(CREATE_ARTIST_FOR_SONG_VIEW
            .ends_with("ORDER BY artists.name COLLATE NOCASE, albums.name COLLATE NOCASE, songs.track"));
        assert!(QUERY_VIEW_SONG_INFO
            .ends_with("ORDER BY artist COLLATE NOCASE, album COLLATE NOCASE, track"));
    }

    #[test]
    fn count_query_accepts_table_names() {
        assert_eq!(
            count_query("songs").as_deref(),
            Some("SELECT COUNT(*) AS count FROM songs")
        );
        assert!(count_query("_private_1").is_some());
    }

    #[test]
    fn count_query_rejects_malformed_names() {
        for name in ["", "1songs", "songs; DROP TABLE artists", "so ngs", "songs--", "\"songs\""] {
            assert!(count_query(name).is_none(), "'{}' should be refused", name);
        }
    }
}
