//! Implementation of the `tscat check` command.

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;
use tscat::parser::{parse_document_bytes, ParseError};
use tscat::{Catalog, LoadOptions};

use crate::output::TsDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.ts)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    contexts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    messages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorJson>,
}

#[derive(Debug, Serialize)]
struct ErrorJson {
    line: usize,
    column: usize,
    message: String,
}

impl From<&ParseError> for ErrorJson {
    fn from(err: &ParseError) -> Self {
        match err {
            ParseError::Syntax {
                line,
                column,
                message,
            } => ErrorJson {
                line: *line,
                column: *column,
                message: message.clone(),
            },
            ParseError::UnexpectedEof { line, column } => ErrorJson {
                line: *line,
                column: *column,
                message: "unexpected end of file".to_string(),
            },
            ParseError::InvalidUtf8 => ErrorJson {
                line: 0,
                column: 0,
                message: "invalid UTF-8".to_string(),
            },
        }
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());
    let mut failed = 0usize;

    for path in &args.files {
        let file = path.display().to_string();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                failed += 1;
                if args.json {
                    results.push(CheckJson {
                        file,
                        ok: false,
                        contexts: None,
                        messages: None,
                        error: Some(ErrorJson {
                            line: 0,
                            column: 0,
                            message: e.to_string(),
                        }),
                    });
                } else {
                    eprintln!("{} {}: {}", "✗".red(), file, e);
                }
                continue;
            }
        };

        match parse_document_bytes(&bytes) {
            Ok(document) => {
                let messages = document.contexts.iter().map(|c| c.messages.len()).sum::<usize>();
                let contexts = document.contexts.len();
                let catalog = Catalog::from_document(document, &LoadOptions::default());
                debug!(file = %file, language = catalog.language(), "parsed");
                if args.json {
                    results.push(CheckJson {
                        file,
                        ok: true,
                        contexts: Some(contexts),
                        messages: Some(messages),
                        error: None,
                    });
                } else {
                    println!(
                        "{} {}: {} messages in {} contexts ({})",
                        "✓".green(),
                        file,
                        messages,
                        contexts,
                        catalog.language()
                    );
                }
            }
            Err(e) => {
                failed += 1;
                if args.json {
                    results.push(CheckJson {
                        file,
                        ok: false,
                        contexts: None,
                        messages: None,
                        error: Some(ErrorJson::from(&e)),
                    });
                } else {
                    let content = String::from_utf8_lossy(&bytes);
                    let diagnostic = TsDiagnostic::from_parse_error(path, &content, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    }

    if failed > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
