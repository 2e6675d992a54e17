//! Translation catalogs for Qt Linguist `.ts` files.
//!
//! A [`Catalog`] holds every translation for one target language, keyed by
//! context name and source string. Catalogs are loaded once, shared behind an
//! [`std::sync::Arc`], and rendered through [`translate`], which picks the
//! plural form for a quantity and fills `%1`..`%9` and `%n` placeholders.
//!
//! ```
//! use tscat::Catalog;
//!
//! let catalog = Catalog::load_str(r#"
//! <TS version="2.1" language="zh_CN">
//! <context>
//!     <name>DevicePanel</name>
//!     <message>
//!         <source>Uninstall %1</source>
//!         <translation>卸载 %1</translation>
//!     </message>
//! </context>
//! </TS>"#).unwrap();
//!
//! assert_eq!(
//!     catalog.translate("DevicePanel", "Uninstall %1", None, &["sunnypilot"]),
//!     "卸载 sunnypilot"
//! );
//! assert_eq!(catalog.tr("DevicePanel", "Missing"), "Missing");
//! ```

pub mod catalog;
pub mod parser;
pub mod types;

#[cfg(feature = "global-catalog")]
mod global;

pub use catalog::{
    Catalog, CatalogStats, ContextEntries, DuplicatePolicy, InsertOutcome, LoadError,
    LoadOptions, LoadWarning, RenderError, Translator, lint_catalog, plural_category,
    plural_form_count, plural_index, render, render_lenient, translate, validate_against,
};
pub use parser::write_document;
pub use types::{Entry, Location, Status};

#[cfg(feature = "global-catalog")]
pub use global::{current, install, tr, tr_n};
