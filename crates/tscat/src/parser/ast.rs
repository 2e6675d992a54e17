//! Public AST types for `.ts` documents and placeholder templates.
//!
//! These types are public to enable external tooling (linters, converters).
//! All text is already unescaped.

use crate::types::{Location, Status};

/// A parsed `<TS>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsDocument {
    /// The `version` attribute of the root element (e.g. "2.1").
    pub version: Option<String>,
    /// The target language tag (e.g. "zh_CN").
    pub language: Option<String>,
    /// The `sourcelanguage` attribute, if present.
    pub source_language: Option<String>,
    /// Context blocks in file order. Names may repeat.
    pub contexts: Vec<ContextBlock>,
}

/// A `<context>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextBlock {
    pub name: String,
    pub comment: Option<String>,
    pub messages: Vec<MessageNode>,
}

/// A `<message>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageNode {
    pub id: Option<String>,
    /// Set by `numerus="yes"`.
    pub numerus: bool,
    pub source: String,
    pub old_source: Option<String>,
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    /// `None` when the message has no `<translation>` element.
    pub translation: Option<TranslationNode>,
}

/// A `<translation>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationNode {
    pub status: Status,
    /// One string for plain translations, one per `<numerusform>` otherwise.
    pub forms: Vec<String>,
}

/// A parsed translation template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including any `%` that does not start a placeholder.
    Literal(String),
    /// A positional placeholder `%1`..`%9`.
    Argument(u8),
    /// The quantity placeholder `%n`.
    Quantity,
}

impl Template {
    /// Positional indices referenced by this template, sorted and deduplicated.
    pub fn argument_indices(&self) -> Vec<u8> {
        let mut indices: Vec<u8> = self
            .segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Argument(index) => Some(*index),
                Segment::Literal(_) | Segment::Quantity => None,
            })
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Whether this template contains a `%n` placeholder.
    pub fn uses_quantity(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Quantity))
    }
}
