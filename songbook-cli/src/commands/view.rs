use std::path::Path;

use crate::CliError;

use super::open_datasource;
use super::query::print_song_artists;

pub(crate) fn run_view_create(db_path: &Path) -> Result<(), CliError> {
    let mut datasource = open_datasource(db_path)?;
    datasource.create_view_for_song_artists()?;
    log::info!("View artist_list is ready");
    datasource.close();
    Ok(())
}

pub(crate) fn run_view_song(db_path: &Path, title: &str) -> Result<(), CliError> {
    let mut datasource = open_datasource(db_path)?;
    let rows = datasource.query_song_info_view(title)?;
    print_song_artists(title, &rows);
    datasource.close();
    Ok(())
}
