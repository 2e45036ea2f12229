//! Settings file location and database path resolution.
//!
//! The settings file is `~/.config/songbook/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/home/me/music/music.db"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Settings {
    #[serde(default)]
    database: DatabaseSettings,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseSettings {
    path: Option<PathBuf>,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("songbook").join("settings.toml")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. `music.db` in the current directory
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_db_path_from(cli_override, &settings_path())
}

fn resolve_db_path_from(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_db_path(settings) {
        return p;
    }
    PathBuf::from(songbook_db::DB_NAME)
}

fn load_db_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    parse_db_path(&contents)
}

fn parse_db_path(contents: &str) -> Option<PathBuf> {
    let settings: Settings = toml::from_str(contents).ok()?;
    settings
        .database
        .path
        .filter(|p| !p.as_os_str().is_empty())
}

/// Load the full settings file as a pretty-printed TOML string for display.
///
/// `Ok(None)` when the file does not exist.
pub(crate) fn load_settings_string(settings: &Path) -> Result<Option<String>, crate::CliError> {
    let contents = match std::fs::read_to_string(settings) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let doc: toml::Value = contents
        .parse()
        .map_err(|e| crate::CliError::config(format!("{}: {}", settings.display(), e)))?;
    let pretty = toml::to_string_pretty(&doc)
        .map_err(|e| crate::CliError::config(e.to_string()))?;
    Ok(Some(pretty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_database_path() {
        let parsed = parse_db_path("[database]\npath = \"/srv/music.db\"\n");
        assert_eq!(parsed, Some(PathBuf::from("/srv/music.db")));
    }

    #[test]
    fn empty_or_missing_path_is_ignored() {
        assert_eq!(parse_db_path("[database]\npath = \"\"\n"), None);
        assert_eq!(parse_db_path("[database]\n"), None);
        assert_eq!(parse_db_path(""), None);
        assert_eq!(parse_db_path("not toml ["), None);
    }

    #[test]
    fn unrelated_tables_are_tolerated() {
        let parsed = parse_db_path("[ui]\ncolor = true\n\n[database]\npath = \"a.db\"\n");
        assert_eq!(parsed, Some(PathBuf::from("a.db")));
    }

    #[test]
    fn override_wins_over_settings() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[database]\npath = \"saved.db\"\n").unwrap();

        let resolved = resolve_db_path_from(Some(PathBuf::from("flag.db")), &settings);
        assert_eq!(resolved, PathBuf::from("flag.db"));

        let resolved = resolve_db_path_from(None, &settings);
        assert_eq!(resolved, PathBuf::from("saved.db"));
    }

    #[test]
    fn falls_back_to_default_name() {
        let tmp = tempfile::TempDir::new().unwrap();
        let resolved = resolve_db_path_from(None, &tmp.path().join("settings.toml"));
        assert_eq!(resolved, PathBuf::from(songbook_db::DB_NAME));
    }

    #[test]
    fn settings_string_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let shown = load_settings_string(&tmp.path().join("settings.toml")).unwrap();
        assert!(shown.is_none());
    }

    #[test]
    fn settings_string_rejects_bad_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[database\n").unwrap();
        assert!(load_settings_string(&settings).is_err());
    }
}
