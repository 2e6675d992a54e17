//! Catalog storage, loading and rendering.
//!
//! This module turns parsed `.ts` documents into immutable [`Catalog`]
//! snapshots, resolves plural forms, fills placeholders, and provides the
//! [`translate`] lookup facade used by application code.

mod error;
mod lint;
mod loader;
mod lookup;
mod plural;
mod render;
mod store;
mod translator;

pub use error::{LoadError, LoadWarning, RenderError};
pub use lint::{lint_catalog, validate_against};
pub use loader::{DuplicatePolicy, LoadOptions};
pub use lookup::translate;
pub use plural::{plural_category, plural_form_count, plural_index};
pub use render::{render, render_lenient, render_template};
pub use store::{Catalog, CatalogStats, ContextEntries, InsertOutcome};
pub use translator::Translator;
