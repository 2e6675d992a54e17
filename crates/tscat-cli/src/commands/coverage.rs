//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tscat::{CatalogStats, LoadOptions, Status};

use super::load_catalog;
use crate::output::table::{format_coverage_table, FileCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Files to report on (.ts)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Exit with non-zero code if any message is unfinished.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    file: String,
    language: String,
    #[serde(flatten)]
    stats: CatalogStats,
    completion: f64,
    unfinished_messages: Vec<MessageKey>,
}

#[derive(Debug, Clone, Serialize)]
struct MessageKey {
    context: String,
    source: String,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let options = LoadOptions::default();
    let mut coverage_data: Vec<FileCoverage> = Vec::new();
    let mut unfinished: Vec<Vec<MessageKey>> = Vec::new();

    for path in &args.files {
        let catalog = load_catalog(path, &options)?;
        unfinished.push(
            catalog
                .entries()
                .filter(|entry| entry.status == Status::Unfinished)
                .map(|entry| MessageKey {
                    context: entry.context.clone(),
                    source: entry.source.clone(),
                })
                .collect(),
        );
        coverage_data.push(FileCoverage {
            file: path.display().to_string(),
            language: catalog.language().to_string(),
            stats: catalog.stats(),
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| c.stats.unfinished > 0);

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .zip(&unfinished)
            .map(|(c, missing)| CoverageJson {
                file: c.file.clone(),
                language: c.language.clone(),
                stats: c.stats,
                completion: c.stats.completion(),
                unfinished_messages: missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(&coverage_data);
        println!("{}", table);

        for (file_coverage, missing) in coverage_data.iter().zip(&unfinished) {
            if !missing.is_empty() {
                println!("\nUnfinished in {}:", file_coverage.file);
                for key in missing {
                    println!("  - {} / {}", key.context, key.source);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
