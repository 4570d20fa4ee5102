//! Shared testing harness for `o365gen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated destination for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Parent of the work directory, used to observe escapes.
    pub(crate) fn outer(&self) -> &Path {
        self.root.path()
    }

    /// Path to the destination directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `o365gen` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `o365gen` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("o365gen").expect("Failed to locate o365gen binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    /// Non-interactive generation without installing dependencies.
    pub(crate) fn generate(&self, args: &[&str]) -> Command {
        let mut cmd = self.cli();
        cmd.args(["-y", "--skip-install"]).args(args);
        cmd
    }

    pub(crate) fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write fixture");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub(crate) fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative))
            .unwrap_or_else(|e| panic!("{} is not valid JSON: {}", relative, e))
    }

    pub(crate) fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }
}
