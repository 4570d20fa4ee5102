//! o365gen: scaffold Office 365 client-side web applications.
//!
//! The generator resolves one immutable configuration, upserts the npm and bower
//! manifests without clobbering existing entries, then writes the application
//! tree from embedded templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    GenerateOutcome, GenerateRequest, InstallStatus, Interaction, UpsertOutcome, generate,
    generate_at,
};
pub use domain::{
    AppError, EmptyNamePolicy, GeneratorOptions, ManifestKind, ResolvedConfig, UpsertResult,
    sanitize,
};
