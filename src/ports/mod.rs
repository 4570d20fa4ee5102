mod dependency_installer;
mod prompter;
mod repository_filesystem;
mod template_store;

pub use dependency_installer::DependencyInstaller;
pub use prompter::{PromptField, Prompter, Question};
pub use repository_filesystem::RepositoryFilesystem;
pub use template_store::TemplateStore;
