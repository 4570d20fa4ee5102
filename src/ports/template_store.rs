use crate::domain::{AppError, ResolvedConfig};

/// Port for the generator's template payloads.
pub trait TemplateStore {
    /// Raw template content, for verbatim copies.
    fn template_bytes(&self, name: &str) -> Result<Vec<u8>, AppError>;

    /// Render a template with the resolved configuration.
    fn render(&self, name: &str, config: &ResolvedConfig) -> Result<String, AppError>;
}
