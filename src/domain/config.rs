//! Option overlay and the resolved generator configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::project_name::sanitize;
use super::{AppError, CURRENT_FOLDER_SENTINEL, RootPath};

/// Display name used when neither an option nor an answer supplies one.
pub const DEFAULT_PROJECT_NAME: &str = "My Office Project";

/// Placeholder application id used until a real Azure AD registration exists.
pub const DEFAULT_APP_ID: &str = "00000000-0000-0000-0000-000000000000";

/// A partial set of generator inputs from one source.
///
/// Explicit options (flags, options file) and prompt answers share this shape so
/// the resolver can overlay them field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorOptions {
    pub name: Option<String>,
    pub root_path: Option<String>,
    pub app_id: Option<String>,
    pub skip_install: Option<bool>,
}

impl GeneratorOptions {
    /// Overlay `self` on top of `base`: every field set in `self` wins.
    pub fn overlay(self, base: GeneratorOptions) -> GeneratorOptions {
        GeneratorOptions {
            name: self.name.or(base.name),
            root_path: self.root_path.or(base.root_path),
            app_id: self.app_id.or(base.app_id),
            skip_install: self.skip_install.or(base.skip_install),
        }
    }

    fn defaults() -> GeneratorOptions {
        GeneratorOptions {
            name: Some(DEFAULT_PROJECT_NAME.to_string()),
            root_path: Some(String::new()),
            app_id: Some(DEFAULT_APP_ID.to_string()),
            skip_install: Some(false),
        }
    }
}

/// What to do when a project name sanitizes to an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyNamePolicy {
    /// Fail with [`AppError::EmptyProjectName`].
    #[default]
    Reject,
    /// Generate with empty names.
    Allow,
}

/// Every input needed by the generation stages, fixed once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    display_name: String,
    internal_name: String,
    root_path: RootPath,
    app_id: String,
    skip_install: bool,
    root_project_name: String,
    generated_id: Uuid,
}

impl ResolvedConfig {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    pub fn root_path(&self) -> &RootPath {
        &self.root_path
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn skip_install(&self) -> bool {
        self.skip_install
    }

    pub fn root_project_name(&self) -> &str {
        &self.root_project_name
    }

    pub fn generated_id(&self) -> Uuid {
        self.generated_id
    }

    /// Rebind the project identity declared by an existing package manifest.
    pub fn with_root_project_name(self, root_project_name: impl Into<String>) -> Self {
        Self { root_project_name: root_project_name.into(), ..self }
    }
}

/// Resolve explicit options and prompt answers into a [`ResolvedConfig`].
///
/// Precedence is defaults < answers < explicit. Only an answered root path may
/// use the `current folder` sentinel.
pub fn resolve(
    explicit: &GeneratorOptions,
    answers: &GeneratorOptions,
    policy: EmptyNamePolicy,
) -> Result<ResolvedConfig, AppError> {
    log_defaulted(explicit, answers);

    let mut answers = answers.clone();
    if answers.root_path.as_deref().map(str::trim) == Some(CURRENT_FOLDER_SENTINEL) {
        answers.root_path = Some(String::new());
    }

    let merged = explicit.clone().overlay(answers.overlay(GeneratorOptions::defaults()));

    let raw_name = merged.name.unwrap_or_default();
    let name = sanitize(&raw_name);
    if name.is_empty() && policy == EmptyNamePolicy::Reject {
        return Err(AppError::EmptyProjectName { raw: raw_name });
    }

    let root_path = RootPath::parse(merged.root_path.as_deref().unwrap_or_default())?;

    let app_id = merged
        .app_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_APP_ID.to_string());

    Ok(ResolvedConfig {
        display_name: name.display_name().to_string(),
        internal_name: name.internal_name().to_string(),
        root_path,
        app_id,
        skip_install: merged.skip_install.unwrap_or(false),
        root_project_name: name.internal_name().to_string(),
        generated_id: Uuid::new_v4(),
    })
}

fn log_defaulted(explicit: &GeneratorOptions, answers: &GeneratorOptions) {
    let fields = [
        ("name", explicit.name.is_none() && answers.name.is_none()),
        ("root_path", explicit.root_path.is_none() && answers.root_path.is_none()),
        ("app_id", explicit.app_id.is_none() && answers.app_id.is_none()),
    ];
    for (field, defaulted) in fields {
        if defaulted {
            debug!(field, "configuration defaulted");
        }
    }
}
