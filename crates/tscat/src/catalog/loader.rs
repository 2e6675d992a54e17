//! Builds catalogs from `.ts` documents.

use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::debug;

use crate::catalog::{Catalog, InsertOutcome, LoadError};
use crate::parser::{MessageNode, ParseError, TsDocument, parse_document, parse_document_bytes};
use crate::types::{Entry, Status};

/// Which definition wins when a (context, source) pair appears twice with the
/// same kind of status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later definition replaces the earlier one.
    #[default]
    LastWins,
    /// The earlier definition is kept.
    FirstWins,
}

/// Options controlling how documents become catalogs.
///
/// # Example
///
/// ```
/// use tscat::{DuplicatePolicy, LoadOptions};
///
/// let options = LoadOptions::builder()
///     .duplicates(DuplicatePolicy::FirstWins)
///     .default_language("zh_CN")
///     .build();
/// assert_eq!(options.default_language(), "zh_CN");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct LoadOptions {
    #[builder(default)]
    duplicates: DuplicatePolicy,

    /// Language used when the document's root has no `language` attribute.
    #[builder(default = "en".to_string())]
    default_language: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions::builder().build()
    }
}

impl LoadOptions {
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Copy of these options with a different fallback language.
    pub(crate) fn with_default_language(&self, language: &str) -> LoadOptions {
        LoadOptions {
            duplicates: self.duplicates,
            default_language: language.to_string(),
        }
    }
}

impl Catalog {
    /// Load a catalog from `.ts` markup with default options.
    pub fn load_str(content: &str) -> Result<Catalog, LoadError> {
        Self::load_str_with(content, &LoadOptions::default())
    }

    /// Load a catalog from `.ts` markup.
    pub fn load_str_with(content: &str, options: &LoadOptions) -> Result<Catalog, LoadError> {
        let document = parse_document(content).map_err(|e| parse_error(e, None))?;
        Ok(Catalog::from_document(document, options))
    }

    /// Load a catalog from a `.ts` file with default options.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
        Self::load_file_with(path, &LoadOptions::default())
    }

    /// Load a catalog from a `.ts` file.
    pub fn load_file_with(
        path: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> Result<Catalog, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let document =
            parse_document_bytes(&bytes).map_err(|e| parse_error(e, Some(path)))?;
        Ok(Catalog::from_document(document, options))
    }

    /// Build a catalog from an already parsed document.
    pub fn from_document(document: TsDocument, options: &LoadOptions) -> Catalog {
        let language = document
            .language
            .unwrap_or_else(|| options.default_language.clone());
        let mut catalog = Catalog::new(language);
        catalog.set_version(document.version);
        catalog.set_source_language(document.source_language);

        let mut replaced = 0usize;
        let mut kept = 0usize;
        for block in document.contexts {
            catalog.set_context_comment(&block.name, block.comment);
            for message in block.messages {
                let entry = entry_from_message(&block.name, message);
                match catalog.insert(entry, options.duplicates) {
                    InsertOutcome::Inserted => {}
                    InsertOutcome::Replaced => replaced += 1,
                    InsertOutcome::Kept => kept += 1,
                }
            }
        }

        let stats = catalog.stats();
        debug!(
            language = catalog.language(),
            contexts = stats.contexts,
            entries = stats.entries,
            finished = stats.finished,
            unfinished = stats.unfinished,
            vanished = stats.vanished,
            duplicates_replaced = replaced,
            duplicates_ignored = kept,
            "loaded catalog"
        );
        catalog
    }
}

/// Turn a `<message>` into an entry of `context`.
fn entry_from_message(context: &str, message: MessageNode) -> Entry {
    let (status, mut variants) = match message.translation {
        Some(translation) => (translation.status, translation.forms),
        None => (Status::Unfinished, Vec::new()),
    };
    if variants.is_empty() {
        variants.push(String::new());
    }

    Entry::builder()
        .context(context)
        .source(message.source)
        .variants(variants)
        .status(status)
        .is_plural(message.numerus)
        .maybe_id(message.id)
        .maybe_old_source(message.old_source)
        .maybe_comment(message.comment)
        .maybe_old_comment(message.old_comment)
        .maybe_extra_comment(message.extra_comment)
        .maybe_translator_comment(message.translator_comment)
        .locations(message.locations)
        .build()
}

/// Attach the file path (or a placeholder) to a parse error.
fn parse_error(e: ParseError, path: Option<&Path>) -> LoadError {
    let path_buf = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("<string>"));

    match e {
        ParseError::Syntax {
            line,
            column,
            message,
        } => LoadError::Parse {
            path: path_buf,
            line,
            column,
            message,
        },
        ParseError::UnexpectedEof { line, column } => LoadError::Parse {
            path: path_buf,
            line,
            column,
            message: "unexpected end of file".to_string(),
        },
        ParseError::InvalidUtf8 => LoadError::Parse {
            path: path_buf,
            line: 0,
            column: 0,
            message: "invalid UTF-8".to_string(),
        },
    }
}
