//! Generator options file loading from the destination root.

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, GeneratorOptions};
use crate::ports::RepositoryFilesystem;

/// Optional options file at the destination root.
pub const OPTIONS_FILE: &str = "o365gen.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionsFile {
    #[serde(default)]
    generator: GeneratorOptions,
}

/// Load `o365gen.toml` if present. A missing file yields empty options.
pub fn load_options<F: RepositoryFilesystem>(
    repository: &F,
) -> Result<GeneratorOptions, AppError> {
    if !repository.file_exists(OPTIONS_FILE) {
        return Ok(GeneratorOptions::default());
    }

    let content = repository.read_file(OPTIONS_FILE)?;
    let file = parse_options_content(&content)?;
    debug!(file = OPTIONS_FILE, "loaded generator options file");
    Ok(file.generator)
}

fn parse_options_content(content: &str) -> Result<OptionsFile, AppError> {
    toml::from_str(content).map_err(AppError::from)
}
