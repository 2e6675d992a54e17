//! Implementation of the `tscat normalize` command.

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;
use tscat::{write_document, DuplicatePolicy, LoadOptions};

use super::load_catalog;

/// Arguments for the normalize command.
#[derive(Debug, clap::Args)]
pub struct NormalizeArgs {
    /// File to normalize (.ts)
    pub file: PathBuf,

    /// Write to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which definition of a duplicated message to keep
    #[arg(long, value_enum, default_value_t = Duplicates::LastWins)]
    pub duplicates: Duplicates,
}

/// Duplicate handling selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Duplicates {
    LastWins,
    FirstWins,
}

impl From<Duplicates> for DuplicatePolicy {
    fn from(value: Duplicates) -> Self {
        match value {
            Duplicates::LastWins => DuplicatePolicy::LastWins,
            Duplicates::FirstWins => DuplicatePolicy::FirstWins,
        }
    }
}

/// Run the normalize command.
pub fn run_normalize(args: NormalizeArgs) -> Result<i32> {
    let options = LoadOptions::builder()
        .duplicates(args.duplicates.into())
        .build();
    let catalog = load_catalog(&args.file, &options)?;
    let document = write_document(&catalog);

    match &args.output {
        Some(path) => {
            fs::write(path, &document)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            let stats = catalog.stats();
            info!(
                path = %path.display(),
                contexts = stats.contexts,
                entries = stats.entries,
                "wrote normalized catalog"
            );
        }
        None => print!("{}", document),
    }
    Ok(exitcode::OK)
}
