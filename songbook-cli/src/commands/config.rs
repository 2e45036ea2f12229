use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings;
use crate::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

/// Show the settings file contents and where the database will be read from.
pub(crate) fn run_config_show(db_override: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "songbook Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match settings::load_settings_string(&path)? {
        Some(contents) => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
            crate::log_blank();
            for line in contents.lines() {
                log::info!("    {}", line);
            }
        }
        None => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    crate::log_blank();

    let db_path = settings::resolve_db_path(db_override);
    log::info!("  Database: {}", db_path.display());
    Ok(())
}
