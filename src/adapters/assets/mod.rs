mod asset_collect;
mod template_engine;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value};

use crate::domain::{AppError, ResolvedConfig};
use crate::ports::TemplateStore;

use self::asset_collect::{AssetSourceFile, collect_asset_sources};
use self::template_engine::{build_template_environment, render_template_by_name};

static TEMPLATES_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template store backed by the payloads compiled into the binary.
pub struct EmbeddedTemplateStore {
    sources: Vec<AssetSourceFile>,
    env: Environment<'static>,
}

impl EmbeddedTemplateStore {
    pub fn new() -> Result<Self, AppError> {
        let sources = collect_asset_sources(&TEMPLATES_ASSET_DIR)?;
        if sources.is_empty() {
            return Err(AppError::Template {
                name: "templates".to_string(),
                details: "embedded template assets are empty".to_string(),
            });
        }
        let env = build_template_environment(&sources)?;
        Ok(Self { sources, env })
    }

    #[cfg(test)]
    fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(AssetSourceFile::relative_path).collect()
    }

    fn source(&self, name: &str) -> Result<&AssetSourceFile, AppError> {
        self.sources.iter().find(|source| source.relative_path() == name).ok_or_else(|| {
            AppError::Template { name: name.to_string(), details: "not found".to_string() }
        })
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template_bytes(&self, name: &str) -> Result<Vec<u8>, AppError> {
        Ok(self.source(name)?.content().to_vec())
    }

    fn render(&self, name: &str, config: &ResolvedConfig) -> Result<String, AppError> {
        let source = self.source(name)?;
        if !source.is_template() {
            return Err(AppError::Template {
                name: name.to_string(),
                details: "not a renderable template".to_string(),
            });
        }
        render_template_by_name(&self.env, name, &Value::from_serialize(config))
    }
}
