//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl FilesystemStore {
    fn checked_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        Ok(full_path)
    }

    fn ensure_parent(full_path: &Path) -> Result<(), AppError> {
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        Ok(())
    }
}

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.checked_path(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        Self::ensure_parent(&full_path)?;
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn file_exists(&self, path: &str) -> bool {
        match self.checked_path(path) {
            Ok(full_path) => full_path.exists(),
            Err(_) => false,
        }
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}
