use include_dir::{Dir, DirEntry};

use crate::domain::AppError;

/// One embedded template payload.
#[derive(Debug, Clone)]
pub struct AssetSourceFile {
    relative_path: &'static str,
    content: &'static [u8],
}

impl AssetSourceFile {
    pub fn new(relative_path: &'static str, content: &'static [u8]) -> Self {
        Self { relative_path, content }
    }

    /// Sources ending in `.j2` are rendered; everything else is copied.
    pub fn is_template(&self) -> bool {
        self.relative_path.ends_with(".j2")
    }

    pub fn relative_path(&self) -> &'static str {
        self.relative_path
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }

    pub fn content_utf8(&self) -> Option<&'static str> {
        std::str::from_utf8(self.content).ok()
    }
}

pub fn collect_asset_sources(
    asset_dir: &'static Dir<'static>,
) -> Result<Vec<AssetSourceFile>, AppError> {
    let mut files = Vec::new();
    collect_entries(asset_dir, &mut files)?;
    files.sort_by(|a, b| a.relative_path.cmp(b.relative_path));
    Ok(files)
}

fn collect_entries(
    dir: &'static Dir<'static>,
    files: &mut Vec<AssetSourceFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                // Embedded paths are relative to the template root.
                let relative_path = file.path().to_str().ok_or_else(|| AppError::Template {
                    name: file.path().to_string_lossy().to_string(),
                    details: "embedded template path is not UTF-8".to_string(),
                })?;
                files.push(AssetSourceFile::new(relative_path, file.contents()));
            }
            DirEntry::Dir(subdir) => collect_entries(subdir, files)?,
        }
    }

    Ok(())
}
