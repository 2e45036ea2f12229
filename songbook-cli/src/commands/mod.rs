pub(crate) mod config;
pub(crate) mod contacts;
pub(crate) mod demo;
pub(crate) mod init;
pub(crate) mod query;
pub(crate) mod view;

use std::path::Path;

use songbook_db::Datasource;

use crate::CliError;

/// Open a database that is expected to exist already.
///
/// Warns (but still opens) when the file is missing, since SQLite would
/// otherwise create an empty one silently.
pub(crate) fn open_datasource(db_path: &Path) -> Result<Datasource, CliError> {
    if !db_path.exists() {
        log::warn!("No database found at {}", db_path.display());
        log::info!("Run 'songbook init' to create empty tables.");
    }
    let mut datasource = Datasource::new();
    datasource
        .open(db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;
    Ok(datasource)
}
