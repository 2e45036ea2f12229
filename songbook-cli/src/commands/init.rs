use std::path::Path;

use songbook_db::Datasource;

use crate::CliError;

pub(crate) fn run_init(db_path: &Path) -> Result<(), CliError> {
    let mut datasource = Datasource::new();
    datasource.open(db_path)?;
    datasource.create_schema()?;
    datasource.close();
    log::info!("Tables ready in {}", db_path.display());
    Ok(())
}
