use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use songbook_db::Datasource;

use crate::CliError;

/// Rebuild the contacts table from scratch and print what is left in it.
pub(crate) fn run_contacts(db_path: &Path) -> Result<(), CliError> {
    let mut datasource = Datasource::new();
    datasource.open(db_path)?;
    let conn = datasource
        .connection()
        .ok_or_else(|| CliError::database("connection closed unexpectedly"))?;

    let contacts = songbook_db::run_contacts_demo(conn)?;

    log::info!(
        "{} {}",
        "Contacts in".if_supports_color(Stdout, |t| t.bold()),
        db_path.display(),
    );
    for contact in &contacts {
        log::info!("  {}", contact);
    }

    datasource.close();
    Ok(())
}
