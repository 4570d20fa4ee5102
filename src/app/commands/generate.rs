//! The generation pipeline: resolve, upsert manifests, materialize, install.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::commands::materialize::materialize;
use crate::app::commands::upsert::{UpsertOutcome, upsert};
use crate::app::config::load_options;
use crate::domain::config::resolve;
use crate::domain::{
    AppError, CURRENT_FOLDER_SENTINEL, DEFAULT_APP_ID, DEFAULT_PROJECT_NAME, EmptyNamePolicy,
    FILE_PLAN, GeneratorOptions, ManifestKind, ResolvedConfig,
};
use crate::ports::{
    DependencyInstaller, PromptField, Prompter, Question, RepositoryFilesystem, TemplateStore,
};

/// Inputs supplied by the caller for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Explicit options; these are never prompted for.
    pub options: GeneratorOptions,
    pub empty_name_policy: EmptyNamePolicy,
}

/// What happened to the install step.
#[derive(Debug)]
pub enum InstallStatus {
    Skipped,
    Completed { command: String },
    /// Generated files are kept; the error is surfaced after reporting.
    Failed(AppError),
}

#[derive(Debug)]
pub struct GenerateOutcome {
    pub config: ResolvedConfig,
    pub package: UpsertOutcome,
    pub library: UpsertOutcome,
    pub files: Vec<String>,
    pub install: InstallStatus,
}

/// Run the full generation pipeline against the destination in `ctx`.
///
/// Stages run strictly in order and the first error aborts the rest. Nothing
/// already written is rolled back.
pub fn execute<F, T, P, I>(
    ctx: &AppContext<F, T>,
    request: &GenerateRequest,
    prompter: &P,
    installer: &I,
) -> Result<GenerateOutcome, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateStore,
    P: Prompter,
    I: DependencyInstaller,
{
    let file_options = load_options(ctx.repository())?;
    let explicit = request.options.clone().overlay(file_options);

    let destination = ctx.repository().resolve_path("");
    let answers = collect_answers(&explicit, prompter, &destination.display().to_string())?;
    let config = resolve(&explicit, &answers, request.empty_name_policy)?;
    info!(
        internal_name = config.internal_name(),
        root_path = %config.root_path(),
        generated_id = %config.generated_id(),
        "resolved configuration"
    );

    let package = upsert(ctx, ManifestKind::Package, &config)?;
    let config = match &package.declared_name {
        Some(name) if name != config.root_project_name() => {
            info!(declared = name.as_str(), "keeping project name from existing package.json");
            config.with_root_project_name(name.clone())
        }
        _ => config,
    };

    let library = upsert(ctx, ManifestKind::Library, &config)?;
    let files = materialize(ctx, &config, FILE_PLAN)?;

    let install = if config.skip_install() {
        InstallStatus::Skipped
    } else {
        match installer.install() {
            Ok(()) => InstallStatus::Completed { command: installer.describe() },
            Err(err) => {
                warn!(error = %err, "dependency installation failed");
                InstallStatus::Failed(err)
            }
        }
    };

    Ok(GenerateOutcome { config, package, library, files, install })
}

/// Ask for every field `explicit` leaves unset, in declaration order.
pub fn collect_answers<P: Prompter>(
    explicit: &GeneratorOptions,
    prompter: &P,
    destination: &str,
) -> Result<GeneratorOptions, AppError> {
    let mut answers = GeneratorOptions::default();

    if explicit.name.is_none() {
        answers.name = prompter.ask(&Question {
            field: PromptField::Name,
            message: "Project name (display name)".to_string(),
            default: DEFAULT_PROJECT_NAME.to_string(),
        })?;
    }

    if explicit.root_path.is_none() {
        answers.root_path = prompter.ask(&Question {
            field: PromptField::RootPath,
            message: format!(
                "Root folder of project? Default to current directory\n ({}), \
                 or specify relative path\n from current (src / public)",
                destination
            ),
            default: CURRENT_FOLDER_SENTINEL.to_string(),
        })?;
    }

    if explicit.app_id.is_none() {
        answers.app_id = prompter.ask(&Question {
            field: PromptField::AppId,
            message: "Application ID as registered in Azure AD".to_string(),
            default: DEFAULT_APP_ID.to_string(),
        })?;
    }

    Ok(answers)
}
