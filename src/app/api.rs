//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::assets::EmbeddedTemplateStore;
use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::npm_command::NpmCommandAdapter;
use crate::adapters::prompt_dialoguer::{DialoguerPrompter, NonInteractivePrompter};
use crate::app::{AppContext, commands::generate};
use crate::ports::RepositoryFilesystem;

pub use crate::app::commands::generate::{GenerateOutcome, GenerateRequest, InstallStatus};
pub use crate::app::commands::upsert::UpsertOutcome;
pub use crate::domain::{
    AppError, EmptyNamePolicy, GeneratorOptions, ManifestKind, ResolvedConfig, UpsertResult,
};

/// Whether missing options may be asked for on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Prompt,
    NonInteractive,
}

/// Create an `AppContext` for a given destination.
fn create_context(
    path: PathBuf,
) -> Result<AppContext<FilesystemStore, EmbeddedTemplateStore>, AppError> {
    let repository = FilesystemStore::new(path);
    let templates = EmbeddedTemplateStore::new()?;
    Ok(AppContext::new(repository, templates))
}

/// Generate a project into the current directory.
pub fn generate(
    request: &GenerateRequest,
    interaction: Interaction,
) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, request, interaction)
}

/// Generate a project into the specified destination directory.
///
/// An install failure does not fail this call: it is reported as
/// [`InstallStatus::Failed`] so callers can still report what was written.
pub fn generate_at(
    path: impl Into<PathBuf>,
    request: &GenerateRequest,
    interaction: Interaction,
) -> Result<GenerateOutcome, AppError> {
    let path = path.into();
    if path.exists() && !path.is_dir() {
        return Err(AppError::config_error(format!(
            "Destination '{}' is not a directory",
            path.display()
        )));
    }
    let ctx = create_context(path.clone())?;
    ctx.repository().create_dir_all("")?;

    let installer = NpmCommandAdapter::new(path);
    match interaction {
        Interaction::Prompt => generate::execute(&ctx, request, &DialoguerPrompter, &installer),
        Interaction::NonInteractive => {
            generate::execute(&ctx, request, &NonInteractivePrompter, &installer)
        }
    }
}
