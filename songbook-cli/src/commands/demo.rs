use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use songbook_catalog::SortOrder;

use crate::CliError;

use super::open_datasource;
use super::query::{print_albums, print_artists, print_count, print_song_artists, print_song_columns};

const DEMO_ARTIST: &str = "Pink Floyd";
const DEMO_SONG: &str = "Go Your Own Way";

/// Walk through every query once against `db_path`.
///
/// Stops at the first failure, or when the artists table is empty.
pub(crate) fn run_demo(db_path: &Path) -> Result<(), CliError> {
    log::info!(
        "{} {}",
        "Opening".if_supports_color(Stdout, |t| t.bold()),
        db_path.display(),
    );
    let mut datasource = open_datasource(db_path)?;

    let artists = datasource.query_artists(SortOrder::Ascending)?;
    print_artists(&artists);
    if artists.is_empty() {
        datasource.close();
        return Ok(());
    }
    crate::log_blank();

    let albums = datasource.query_albums_for_artist(DEMO_ARTIST, SortOrder::Ascending)?;
    print_albums(DEMO_ARTIST, &albums);
    crate::log_blank();

    let song_artists = datasource.query_artists_for_song(DEMO_SONG, SortOrder::Ascending)?;
    print_song_artists(DEMO_SONG, &song_artists);
    crate::log_blank();

    let columns = datasource.query_song_columns()?;
    print_song_columns(&columns);
    crate::log_blank();

    let count = datasource.count(songbook_db::sql::TABLE_SONGS)?;
    print_count(songbook_db::sql::TABLE_SONGS, count);
    crate::log_blank();

    datasource.create_view_for_song_artists()?;
    let from_view = datasource.query_song_info_view(DEMO_SONG)?;
    print_song_artists(DEMO_SONG, &from_view);

    datasource.close();
    Ok(())
}
