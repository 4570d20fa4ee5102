//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{
    self, GenerateOutcome, GenerateRequest, InstallStatus, Interaction, UpsertOutcome,
};
use crate::domain::{AppError, EmptyNamePolicy, GeneratorOptions, UpsertResult};

#[derive(Parser)]
#[command(name = "o365gen")]
#[command(version)]
#[command(
    about = "Scaffold an Office 365 client-side web application",
    long_about = None
)]
struct Cli {
    /// Title of the Office project
    #[arg(long)]
    name: Option<String>,
    /// Relative path where the project should be created (blank = current directory)
    #[arg(long)]
    root_path: Option<String>,
    /// Application ID as registered in Azure AD
    #[arg(long, alias = "appId")]
    app_id: Option<String>,
    /// Skip running package managers (npm) post scaffolding
    #[arg(long)]
    skip_install: bool,
    /// Never prompt; options not supplied take their defaults
    #[arg(short = 'y', long)]
    yes: bool,
    /// Allow a project name that sanitizes to nothing
    #[arg(long)]
    allow_empty_name: bool,
    /// Destination directory (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    destination: Option<PathBuf>,
}

impl Cli {
    fn request(&self) -> GenerateRequest {
        GenerateRequest {
            options: GeneratorOptions {
                name: self.name.clone(),
                root_path: self.root_path.clone(),
                app_id: self.app_id.clone(),
                skip_install: self.skip_install.then_some(true),
            },
            empty_name_policy: if self.allow_empty_name {
                EmptyNamePolicy::Allow
            } else {
                EmptyNamePolicy::Reject
            },
        }
    }

    fn interaction(&self) -> Interaction {
        if self.yes { Interaction::NonInteractive } else { Interaction::Prompt }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = run_generate(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: &Cli) -> Result<(), AppError> {
    let request = cli.request();
    let outcome = match &cli.destination {
        Some(path) => api::generate_at(path.clone(), &request, cli.interaction())?,
        None => api::generate(&request, cli.interaction())?,
    };

    report(&outcome);

    match outcome.install {
        InstallStatus::Skipped => {
            println!("⏭️  Skipped dependency installation");
            Ok(())
        }
        InstallStatus::Completed { command } => {
            println!("✅ Installed dependencies ({})", command);
            Ok(())
        }
        InstallStatus::Failed(err) => Err(err),
    }
}

fn report(outcome: &GenerateOutcome) {
    for manifest in [&outcome.package, &outcome.library] {
        report_manifest(manifest);
    }

    let root = outcome.config.root_path();
    let location = if root.is_root() { ".".to_string() } else { format!("{}/", root) };
    println!(
        "✅ Generated '{}' ({} file(s) at {})",
        outcome.config.display_name(),
        outcome.files.len(),
        location
    );
}

fn report_manifest(outcome: &UpsertOutcome) {
    match &outcome.result {
        UpsertResult::Created => println!("✅ Created {}", outcome.kind),
        UpsertResult::Merged { added } if added.is_empty() => {
            println!("✅ {} already declares the required packages", outcome.kind)
        }
        UpsertResult::Merged { added } => {
            println!("➕ Adding additional packages to {}:", outcome.kind);
            for name in added {
                println!("  • {}", name);
            }
        }
    }
}
