//! Test double for `RepositoryFilesystem`.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockRepositoryFs {
    files: TestFiles,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let bytes = self.files.get_bytes(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })?;
        String::from_utf8(bytes).map_err(|e| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.write_bytes(path, content.as_bytes())
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        self.files.files.lock().unwrap().insert(path.to_string(), content.to_vec());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let files = self.files.files.lock().unwrap();
        if files.contains_key(path) {
            return true;
        }
        let prefix = if path.ends_with('/') { path.to_string() } else { format!("{}/", path) };
        files.keys().any(|k| k.starts_with(&prefix))
    }

    fn create_dir_all(&self, _path: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
