//! Error and warning types for catalogs.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors that occur during catalog loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a `.ts` file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Attempted to reload a catalog that was loaded from a string.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}

/// An error that occurred while filling placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template references `%{index}` but fewer arguments were supplied.
    #[error("placeholder %{index} has no argument ({supplied} supplied)")]
    MissingArgument { index: u8, supplied: usize },
}

/// A problem found by linting or validating a catalog.
///
/// Warnings never prevent loading; they are reported by tooling.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// A plural entry whose form count does not match the language.
    #[error(
        "'{context}' / '{source_text}': {found} plural form(s), language '{language}' uses {expected}"
    )]
    PluralFormCount {
        context: String,
        source_text: String,
        language: String,
        expected: usize,
        found: usize,
    },

    /// A translation whose `%1`..`%9` (or `%n`) set differs from its source.
    #[error(
        "'{context}' / '{source_text}': placeholders {} in source, {} in translation",
        format_placeholders(source_placeholders),
        format_placeholders(translation_placeholders)
    )]
    PlaceholderMismatch {
        context: String,
        source_text: String,
        source_placeholders: Vec<String>,
        translation_placeholders: Vec<String>,
    },

    /// A finished translation with an empty variant.
    #[error("'{context}' / '{source_text}': finished translation is empty")]
    EmptyTranslation { context: String, source_text: String },

    /// A plural message whose source has no `%n`.
    #[error("'{context}' / '{source_text}': plural message without %n")]
    NumerusWithoutQuantity { context: String, source_text: String },

    /// A message in the target catalog that the source catalog lacks.
    #[error("'{context}' / '{source_text}': not present in the source catalog ({language})")]
    UnknownMessage {
        context: String,
        source_text: String,
        language: String,
    },

    /// A message of the source catalog with no finished translation.
    #[error("'{context}' / '{source_text}': no finished translation ({language})")]
    MissingMessage {
        context: String,
        source_text: String,
        language: String,
    },
}

fn format_placeholders(placeholders: &[String]) -> String {
    if placeholders.is_empty() {
        "none".to_string()
    } else {
        placeholders.join(", ")
    }
}
