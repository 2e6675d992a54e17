use bon::Builder;
use serde::Serialize;

use super::{Location, Status};

/// One translatable message of a catalog.
///
/// An entry is keyed by its `context` and `source` strings. Plural entries
/// carry one variant per plural form of the catalog's language; all other
/// entries carry exactly one variant.
///
/// # Example
///
/// ```
/// use tscat::{Entry, Status};
///
/// let entry = Entry::builder()
///     .context("AbstractAlert")
///     .source("Close")
///     .variants(vec!["关闭".to_string()])
///     .build();
///
/// assert_eq!(entry.status, Status::Finished);
/// assert_eq!(entry.variant(0), Some("关闭"));
/// assert_eq!(entry.variant(4), Some("关闭"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize)]
#[builder(on(String, into))]
pub struct Entry {
    /// Name of the owning context.
    pub context: String,

    /// Source-language text, compared byte-for-byte on lookup.
    pub source: String,

    /// Translated text. Plural entries list one string per plural form.
    pub variants: Vec<String>,

    #[builder(default)]
    pub status: Status,

    /// Whether the message was declared with `numerus="yes"`.
    #[builder(default)]
    pub is_plural: bool,

    /// Optional message identifier (`id` attribute).
    pub id: Option<String>,

    /// Source text of a previous revision (`<oldsource>`).
    pub old_source: Option<String>,

    /// Disambiguation comment written by the developer.
    pub comment: Option<String>,

    /// Developer comment of a previous revision (`<oldcomment>`).
    pub old_comment: Option<String>,

    /// Extra comment for translators.
    pub extra_comment: Option<String>,

    /// Comment left by the translator.
    pub translator_comment: Option<String>,

    #[builder(default)]
    pub locations: Vec<Location>,
}

impl Entry {
    /// Get the variant at `index`, clamped to the last available variant.
    ///
    /// Returns `None` only when the entry has no variants at all.
    pub fn variant(&self, index: usize) -> Option<&str> {
        self.variants
            .get(index)
            .or_else(|| self.variants.last())
            .map(String::as_str)
    }

    /// Whether this entry may be shown to users.
    pub fn is_servable(&self) -> bool {
        self.status.is_finished() && !self.variants.is_empty()
    }
}
