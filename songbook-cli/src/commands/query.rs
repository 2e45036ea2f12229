use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use songbook_catalog::{Artist, SongArtist, SortOrder};

use crate::CliError;

use super::open_datasource;

pub(crate) fn run_artists(db_path: &Path, order: SortOrder) -> Result<(), CliError> {
    let mut datasource = open_datasource(db_path)?;
    let artists = datasource.query_artists(order)?;
    print_artists(&artists);
    datasource.close();
    Ok(())
}

pub(crate) fn run_albums(db_path: &Path, artist: &str, order: SortOrder) -> Result<(), CliError> {
    let mut datasource = open_datasource(db_path)?;
    let albums = datasource.query_albums_for_artist(artist, order)?;
    print_albums(artist, &albums);
    datasource.close();
    Ok(())
}

pub(crate) fn run_song(db_path: &Path, title: &str, order: SortOrder) -> Result<(), CliError> {
    let mut datasource = open_datasource(db_path)?;
    let rows = datasource.query_artists_for_song(title, order)?;
    print_song_artists(title, &rows);
    datasource.close();
    Ok(())
}

pub(crate) fn run_count(db_path: &Path, table: &str) -> Result<(), CliError> {
    let mut datasource = open_datasource(db_path)?;
    let count = datasource.count(table)?;
    print_count(table, count);
    datasource.close();
    Ok(())
}

pub(crate) fn run_metadata(db_path: &Path) -> Result<(), CliError> {
    let mut datasource = open_datasource(db_path)?;
    let columns = datasource.query_song_columns()?;
    print_song_columns(&columns);
    datasource.close();
    Ok(())
}

// ── Output ──────────────────────────────────────────────────────────────────

pub(crate) fn print_artists(artists: &[Artist]) {
    if artists.is_empty() {
        log::info!("No artists!");
        return;
    }
    log::info!("{}", "Artists".if_supports_color(Stdout, |t| t.bold()));
    for artist in artists {
        log::info!(
            "  ID = {:>4}, Name = {}",
            artist.id,
            artist.name.if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}

pub(crate) fn print_albums(artist: &str, albums: &[String]) {
    if albums.is_empty() {
        log::info!("No albums found for \"{}\"", artist);
        return;
    }
    log::info!(
        "{} {}",
        "Albums by".if_supports_color(Stdout, |t| t.bold()),
        artist.if_supports_color(Stdout, |t| t.cyan()),
    );
    for album in albums {
        log::info!("  {}", album);
    }
}

pub(crate) fn print_song_artists(title: &str, rows: &[SongArtist]) {
    if rows.is_empty() {
        log::info!("Couldn't find the artist for the song \"{}\"", title);
        return;
    }
    log::info!(
        "{} {}",
        "Recordings of".if_supports_color(Stdout, |t| t.bold()),
        title.if_supports_color(Stdout, |t| t.cyan()),
    );
    for row in rows {
        log::info!(
            "  Artist name = {} Album name = {} Track = {}",
            row.artist_name.if_supports_color(Stdout, |t| t.cyan()),
            row.album_name,
            row.track,
        );
    }
}

pub(crate) fn print_count(table: &str, count: i64) {
    log::info!("Number of rows in {}: {}", table, count);
}

pub(crate) fn print_song_columns(columns: &[String]) {
    log::info!("{}", "Columns of songs".if_supports_color(Stdout, |t| t.bold()));
    for (i, column) in columns.iter().enumerate() {
        log::info!("  Column {} in the songs table is named {}", i + 1, column);
    }
}
