use std::io;

use thiserror::Error;

/// Library-wide error type for o365gen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An existing manifest could not be parsed; it is left untouched.
    #[error("Malformed manifest '{path}': {details}")]
    MalformedManifest { path: String, details: String },

    /// Path escapes the destination root.
    #[error("Path traversal detected: '{0}' escapes the destination directory")]
    PathTraversal(String),

    /// Root path option is absolute or escapes the destination root.
    #[error("Invalid root path '{path}': {reason}")]
    InvalidRootPath { path: String, reason: String },

    /// Project name sanitized down to nothing.
    #[error("Project name '{raw}' contains no usable characters")]
    EmptyProjectName { raw: String },

    /// Embedded template missing or failed to render.
    #[error("Template '{name}' failed: {details}")]
    Template { name: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Dependency installation failed. Generated files are kept.
    #[error("Dependency installation failed running '{command}': {details}")]
    InstallFailed { command: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn malformed(path: &str, details: impl ToString) -> Self {
        AppError::MalformedManifest { path: path.to_string(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting io semantics.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::MalformedManifest { .. }
            | AppError::PathTraversal(_)
            | AppError::InvalidRootPath { .. }
            | AppError::EmptyProjectName { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Template { .. } => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::InstallFailed { .. } => io::ErrorKind::Other,
        }
    }
}
