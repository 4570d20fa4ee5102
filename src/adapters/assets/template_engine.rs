use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

use super::asset_collect::AssetSourceFile;

pub fn build_template_environment(
    sources: &[AssetSourceFile],
) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    // No escaping; JSON and JS templates encode every value with `tojson`.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    for source in sources.iter().filter(|source| source.is_template()) {
        let content = source.content_utf8().ok_or_else(|| AppError::Template {
            name: source.relative_path().to_string(),
            details: "template is not UTF-8".to_string(),
        })?;
        env.add_template(source.relative_path(), content).map_err(|e| AppError::Template {
            name: source.relative_path().to_string(),
            details: format!("failed to register: {}", e),
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| AppError::Template {
        name: template_name.to_string(),
        details: format!("failed to load: {}", e),
    })?;

    template.render(ctx).map_err(|e| AppError::Template {
        name: template_name.to_string(),
        details: format!("failed to render: {}", e),
    })
}
