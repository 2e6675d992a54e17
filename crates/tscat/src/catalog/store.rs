//! In-memory catalog storage.

use std::collections::HashMap;

use serde::Serialize;
use strsim::levenshtein;
use tracing::trace;

use crate::catalog::DuplicatePolicy;
use crate::types::{Entry, Status};

/// All translations for one target language.
///
/// Entries are grouped by context and keyed by source text. A catalog is
/// built by the loader and then shared read-only (typically as
/// `Arc<Catalog>`); replacing translations means building a new catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Target language tag (e.g. "zh_CN").
    language: String,
    /// Declared source language, if any.
    source_language: Option<String>,
    /// `.ts` format version the catalog was read from.
    version: Option<String>,
    /// Contexts in first-appearance order.
    contexts: Vec<ContextEntries>,
    /// Maps context name to its position in `contexts`.
    context_index: HashMap<String, usize>,
}

/// The entries of one context.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextEntries {
    name: String,
    comment: Option<String>,
    /// Entries in first-appearance order.
    entries: Vec<Entry>,
    /// Maps source text to its position in `entries`.
    index: HashMap<String, usize>,
}

/// Result of [`Catalog::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// No entry existed for the key.
    Inserted,
    /// The new entry replaced an existing one.
    Replaced,
    /// The existing entry took precedence; the new one was dropped.
    Kept,
}

/// Entry counts of a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub contexts: usize,
    pub entries: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub vanished: usize,
    pub plural: usize,
}

impl CatalogStats {
    /// Percentage of non-vanished entries that are finished.
    pub fn completion(&self) -> f64 {
        let live = self.finished + self.unfinished;
        if live == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / live as f64
        }
    }
}

impl ContextEntries {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            comment: None,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Entries in first-appearance order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, source: &str) -> Option<&Entry> {
        self.index.get(source).map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `new` takes the place of `old` for the same key.
///
/// A live entry always beats a vanished one, whatever the order; between two
/// entries of the same kind the duplicate policy decides.
fn supersedes(new: &Entry, old: &Entry, policy: DuplicatePolicy) -> bool {
    match (old.status.is_vanished(), new.status.is_vanished()) {
        (true, false) => true,
        (false, true) => false,
        _ => policy == DuplicatePolicy::LastWins,
    }
}

impl Catalog {
    /// Create an empty catalog for a language.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn source_language(&self) -> Option<&str> {
        self.source_language.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub(crate) fn set_source_language(&mut self, source_language: Option<String>) {
        self.source_language = source_language;
    }

    pub(crate) fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    /// Record the comment of a context, creating the context if needed.
    ///
    /// The first comment seen for a context is kept.
    pub(crate) fn set_context_comment(&mut self, context: &str, comment: Option<String>) {
        let entries = self.context_mut(context);
        if entries.comment.is_none() {
            entries.comment = comment;
        }
    }

    fn context_mut(&mut self, name: &str) -> &mut ContextEntries {
        let position = match self.context_index.get(name).copied() {
            Some(position) => position,
            None => {
                self.contexts.push(ContextEntries::new(name));
                let position = self.contexts.len() - 1;
                self.context_index.insert(name.to_string(), position);
                position
            }
        };
        &mut self.contexts[position]
    }

    /// Insert an entry, resolving duplicates of (context, source).
    ///
    /// A non-vanished entry always replaces a vanished one and a vanished entry
    /// never replaces a non-vanished one. Otherwise `policy` decides. A
    /// replaced entry keeps its original position.
    pub fn insert(&mut self, entry: Entry, policy: DuplicatePolicy) -> InsertOutcome {
        let context = self.context_mut(&entry.context);
        let existing = context.index.get(&entry.source).copied();
        match existing {
            Some(position) => {
                if supersedes(&entry, &context.entries[position], policy) {
                    trace!(context = %entry.context, source = %entry.source, "replacing duplicate message");
                    context.entries[position] = entry;
                    InsertOutcome::Replaced
                } else {
                    trace!(context = %entry.context, source = %entry.source, "ignoring duplicate message");
                    InsertOutcome::Kept
                }
            }
            None => {
                context
                    .index
                    .insert(entry.source.clone(), context.entries.len());
                context.entries.push(entry);
                InsertOutcome::Inserted
            }
        }
    }

    /// Get the stored entry for (context, source), whatever its status.
    pub fn get(&self, context: &str, source: &str) -> Option<&Entry> {
        self.context(context).and_then(|entries| entries.get(source))
    }

    pub fn context(&self, name: &str) -> Option<&ContextEntries> {
        self.context_index
            .get(name)
            .map(|&position| &self.contexts[position])
    }

    /// Contexts in first-appearance order.
    pub fn contexts(&self) -> impl Iterator<Item = &ContextEntries> {
        self.contexts.iter()
    }

    /// All entries, context by context.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.contexts.iter().flat_map(|context| context.entries.iter())
    }

    /// Number of entries across all contexts.
    pub fn len(&self) -> usize {
        self.contexts.iter().map(ContextEntries::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            contexts: self.contexts.len(),
            ..CatalogStats::default()
        };
        for entry in self.entries() {
            stats.entries += 1;
            match entry.status {
                Status::Finished => stats.finished += 1,
                Status::Unfinished => stats.unfinished += 1,
                Status::Vanished => stats.vanished += 1,
            }
            if entry.is_plural {
                stats.plural += 1;
            }
        }
        stats
    }

    /// Context names similar to `name`, closest first.
    ///
    /// Uses Levenshtein distance with a threshold that scales with length.
    /// Returns at most three names.
    pub fn similar_contexts(&self, name: &str) -> Vec<&str> {
        let threshold = match name.chars().count() {
            0..=3 => 1,
            4..=8 => 2,
            _ => 3,
        };
        let mut candidates: Vec<(usize, &str)> = self
            .contexts
            .iter()
            .map(|context| (levenshtein(name, &context.name), context.name()))
            .filter(|&(distance, _)| distance > 0 && distance <= threshold)
            .collect();
        candidates.sort();
        candidates.into_iter().take(3).map(|(_, name)| name).collect()
    }
}
