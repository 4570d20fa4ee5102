//! Destination-level filesystem operations.
//!
//! This port provides file I/O scoped to the destination root. It knows
//! nothing about manifests or templates; those belong to the commands.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for low-level destination filesystem operations.
///
/// All `path` arguments are `/`-separated and relative to the destination root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Write raw bytes to a file, creating parent directories as needed.
    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the destination root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
