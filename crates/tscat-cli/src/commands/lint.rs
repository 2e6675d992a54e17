//! Implementation of the `tscat lint` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use tscat::{lint_catalog, validate_against, LoadOptions};

use super::load_catalog;

/// Arguments for the lint command.
#[derive(Debug, clap::Args)]
pub struct LintArgs {
    /// Translation file to lint (.ts)
    pub file: PathBuf,

    /// Source-language file to compare messages against
    #[arg(long)]
    pub against: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the lint command.
pub fn run_lint(args: LintArgs) -> Result<i32> {
    let options = LoadOptions::default();
    let catalog = load_catalog(&args.file, &options)?;

    let mut warnings = lint_catalog(&catalog);
    if let Some(source_path) = &args.against {
        let source = load_catalog(source_path, &options)?;
        warnings.extend(validate_against(&source, &catalog));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&warnings).into_diagnostic()?);
    } else if warnings.is_empty() {
        println!("{} {}: no warnings found", "✓".green(), args.file.display());
    } else {
        println!(
            "{}: {} warning(s):\n",
            args.file.display(),
            warnings.len()
        );
        for warning in &warnings {
            println!("  {} {}", "warning:".yellow(), warning);
        }
    }

    if warnings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
