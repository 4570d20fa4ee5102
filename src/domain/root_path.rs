use std::fmt;
use std::path::{Component, Path};

use serde::{Serialize, Serializer};

use super::AppError;

/// Prompt answer that means "generate into the destination root".
pub const CURRENT_FOLDER_SENTINEL: &str = "current folder";

/// A validated relative path under the destination root.
///
/// Guarantees:
/// - Never absolute
/// - `.` segments and inner `..` are resolved away
/// - Never escapes the destination root
/// - Uses `/` separators, no leading or trailing slash
/// - Empty means the destination root itself
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RootPath(String);

impl RootPath {
    /// Parse a user-supplied root path.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();

        let invalid = |reason: &str| AppError::InvalidRootPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        let normalized_input = trimmed.replace('\\', "/");
        let path = Path::new(&normalized_input);

        let mut segments: Vec<String> = Vec::new();
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(invalid("must be relative to the destination directory"));
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if segments.pop().is_none() {
                        return Err(invalid("must not escape the destination directory"));
                    }
                }
                Component::Normal(segment) => {
                    segments.push(segment.to_string_lossy().to_string());
                }
            }
        }

        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Join a `/`-separated relative path under this root.
    pub fn join(&self, relative: &str) -> String {
        if self.is_root() { relative.to_string() } else { format!("{}/{}", self.0, relative) }
    }
}

impl fmt::Display for RootPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RootPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
