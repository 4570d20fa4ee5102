pub mod config;
pub mod error;
pub mod file_plan;
pub mod manifest;
pub mod project_name;
pub mod root_path;

pub use config::{
    DEFAULT_APP_ID, DEFAULT_PROJECT_NAME, EmptyNamePolicy, GeneratorOptions, ResolvedConfig,
};
pub use error::AppError;
pub use file_plan::{Anchor, FILE_PLAN, RenderMode, TemplateEntry};
pub use manifest::{ManifestDocument, ManifestKind, RequiredDependency, UpsertResult};
pub use project_name::{ProjectName, sanitize};
pub use root_path::{CURRENT_FOLDER_SENTINEL, RootPath};
