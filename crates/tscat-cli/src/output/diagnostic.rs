//! Miette diagnostic wrapper for `.ts` parse errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use tscat::parser::ParseError;

/// A miette-compatible diagnostic for `.ts` parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(tscat::syntax))]
pub struct TsDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TsDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column, message, help) = match err {
            ParseError::Syntax {
                line,
                column,
                message,
            } => (*line, *column, message.clone(), None),
            ParseError::UnexpectedEof { line, column } => (
                *line,
                *column,
                "unexpected end of file".to_string(),
                Some("an element is never closed; the file may be truncated".to_string()),
            ),
            ParseError::InvalidUtf8 => (
                1,
                1,
                "invalid UTF-8".to_string(),
                Some(".ts files must be UTF-8 encoded".to_string()),
            ),
        };

        TsDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message,
            help,
        }
    }
}

/// Convert a 1-based line and character column to a byte offset.
///
/// Clamped to the content length so miette never indexes out of bounds.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let line_start = line_start.min(content.len());
    let within_line = content[line_start..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(content.len() - line_start, |(offset, _)| offset);
    line_start + within_line
}
