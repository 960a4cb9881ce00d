use std::io;

use thiserror::Error;

/// Library-wide error type for gasinit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Missing or malformed input (name, path, template location).
    #[error("{0}")]
    Validation(String),

    /// Target project directory already exists and --force-directory was not given.
    #[error("Project directory already exists: {0}")]
    ProjectExists(String),

    /// The template installation is missing an expected file or directory.
    #[error("Template source is missing '{0}'")]
    TemplateMissing(String),

    /// A JSON config file could not be parsed.
    #[error("Failed to parse {file}: {source}")]
    ConfigParse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// An external command exited non-zero or could not be spawned.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Validation(_) | AppError::ConfigParse { .. } => io::ErrorKind::InvalidInput,
            AppError::TemplateMissing(_) => io::ErrorKind::NotFound,
            AppError::ProjectExists(_) => io::ErrorKind::AlreadyExists,
            AppError::CommandFailed { .. } => io::ErrorKind::Other,
        }
    }
}
