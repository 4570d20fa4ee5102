use crate::domain::AppError;

/// Port for the package-manager step that runs after generation.
pub trait DependencyInstaller {
    /// Human-readable command line, for status output.
    fn describe(&self) -> String;

    /// Install dependencies declared by the manifests at the destination root.
    fn install(&self) -> Result<(), AppError>;
}
