//! Writing the fixed file plan into the destination.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, RenderMode, ResolvedConfig, TemplateEntry};
use crate::ports::{RepositoryFilesystem, TemplateStore};

/// Copy or render every entry of `plan`, returning the written paths in order.
///
/// The first failed write aborts; files already written are kept.
pub fn materialize<F, T>(
    ctx: &AppContext<F, T>,
    config: &ResolvedConfig,
    plan: &[TemplateEntry],
) -> Result<Vec<String>, AppError>
where
    F: RepositoryFilesystem,
    T: TemplateStore,
{
    let mut written = Vec::with_capacity(plan.len());

    for entry in plan {
        let target = entry.target_path(config.root_path());
        match entry.mode {
            RenderMode::Verbatim => {
                let bytes = ctx.templates().template_bytes(entry.template)?;
                ctx.repository().write_bytes(&target, &bytes)?;
            }
            RenderMode::Rendered => {
                let content = ctx.templates().render(entry.template, config)?;
                ctx.repository().write_file(&target, &content)?;
            }
        }
        debug!(template = entry.template, target = %target, mode = ?entry.mode, "wrote file");
        written.push(target);
    }

    Ok(written)
}
