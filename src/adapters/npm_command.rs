use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::DependencyInstaller;

/// Runs the package manager's install in the destination root.
#[derive(Debug, Clone)]
pub struct NpmCommandAdapter {
    root: PathBuf,
    program: String,
    args: Vec<String>,
}

impl NpmCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self::with_program(root, "npm", &["install"])
    }

    /// Use a different executable, e.g. a package-manager shim.
    pub fn with_program(root: PathBuf, program: &str, args: &[&str]) -> Self {
        Self {
            root,
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl DependencyInstaller for NpmCommandAdapter {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn install(&self) -> Result<(), AppError> {
        debug!(command = %self.describe(), root = %self.root.display(), "running installer");

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::InstallFailed {
                command: self.describe(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::InstallFailed {
                command: self.describe(),
                details: if stderr.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(())
    }
}
