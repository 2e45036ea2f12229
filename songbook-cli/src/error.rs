use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database open or query failed
    #[error("Database error: {0}")]
    Database(String),

    /// Settings file could not be read
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<songbook_db::DatasourceError> for CliError {
    fn from(e: songbook_db::DatasourceError) -> Self {
        Self::Database(e.to_string())
    }
}
