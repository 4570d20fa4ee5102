use crate::ports::{RepositoryFilesystem, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, T: TemplateStore> {
    repository: F,
    templates: T,
}

impl<F: RepositoryFilesystem, T: TemplateStore> AppContext<F, T> {
    /// Create a new application context.
    pub fn new(repository: F, templates: T) -> Self {
        Self { repository, templates }
    }

    /// Get a reference to the destination filesystem.
    pub fn repository(&self) -> &F {
        &self.repository
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
