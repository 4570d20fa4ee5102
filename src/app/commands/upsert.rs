//! Create-or-merge for the dependency manifests.

use std::io::ErrorKind;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, ManifestDocument, ManifestKind, ResolvedConfig, UpsertResult};
use crate::ports::{RepositoryFilesystem, TemplateStore};

/// Result of upserting one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub kind: ManifestKind,
    pub result: UpsertResult,
    /// Project name an existing manifest already declared.
    pub declared_name: Option<String>,
}

/// Ensure the manifest of `kind` at the destination root declares every
/// required dependency.
///
/// An absent manifest is rendered from its template. An existing one is parsed
/// and only missing entries are inserted; unparsable content fails with
/// [`AppError::MalformedManifest`] and is never overwritten.
pub fn upsert<F, T>(
    ctx: &AppContext<F, T>,
    kind: ManifestKind,
    config: &ResolvedConfig,
) -> Result<UpsertOutcome, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateStore,
{
    let path = kind.file_name();

    if !ctx.repository().file_exists(path) {
        let content = ctx.templates().render(kind.template(), config)?;
        ctx.repository().write_file(path, &content)?;
        info!(manifest = path, "created manifest");
        return Ok(UpsertOutcome { kind, result: UpsertResult::Created, declared_name: None });
    }

    let existing = ctx.repository().read_file(path).map_err(|err| match err {
        AppError::Io(io) if io.kind() == ErrorKind::InvalidData => AppError::malformed(path, io),
        other => other,
    })?;
    let mut document = ManifestDocument::parse(kind, path, &existing)?;
    let declared_name = document.declared_name().map(str::to_string);

    let added = document.insert_missing(kind.required_dependencies());
    if added.is_empty() {
        debug!(manifest = path, "manifest already declares every required dependency");
    } else {
        ctx.repository().write_file(path, &document.to_json_string()?)?;
        info!(manifest = path, added = ?added, "merged dependencies into manifest");
    }

    Ok(UpsertOutcome { kind, result: UpsertResult::Merged { added }, declared_name })
}
