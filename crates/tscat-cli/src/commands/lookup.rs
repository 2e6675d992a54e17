//! Implementation of the `tscat lookup` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tscat::{LoadOptions, Status};

use super::load_catalog;

/// Arguments for the lookup command.
#[derive(Debug, clap::Args)]
pub struct LookupArgs {
    /// Catalog file (.ts)
    #[arg(long, short = 'f')]
    pub file: PathBuf,

    /// Context name (e.g., DevicePanel)
    #[arg(long, short = 'c')]
    pub context: String,

    /// Source text, exactly as written in the source code
    #[arg(long, short = 's')]
    pub source: String,

    /// Quantity for plural messages and %n
    #[arg(short = 'n', long = "quantity", allow_negative_numbers = true)]
    pub quantity: Option<i64>,

    /// Positional argument for %1..%9 (repeatable, in order)
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for lookup results.
#[derive(Serialize)]
pub struct LookupResult {
    pub result: String,
    /// Status of the stored entry, absent when the key is unknown.
    pub status: Option<Status>,
    /// Whether the result came from a translation rather than the source.
    pub translated: bool,
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs) -> Result<i32> {
    let catalog = load_catalog(&args.file, &LoadOptions::default())?;

    if catalog.context(&args.context).is_none() {
        let suggestions = catalog.similar_contexts(&args.context);
        if suggestions.is_empty() {
            eprintln!(
                "{} unknown context '{}'",
                "warning:".yellow(),
                args.context
            );
        } else {
            eprintln!(
                "{} unknown context '{}'; did you mean {}?",
                "warning:".yellow(),
                args.context,
                suggestions.join(", ")
            );
        }
    }

    let entry = catalog.get(&args.context, &args.source);
    let result = catalog.translate(&args.context, &args.source, args.quantity, &args.args);

    if args.json {
        let output = LookupResult {
            result,
            status: entry.map(|e| e.status),
            translated: catalog
                .template_for(&args.context, &args.source, args.quantity)
                .is_some(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
