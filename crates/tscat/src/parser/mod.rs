//! `.ts` document and placeholder template parsers.
//!
//! The document parser produces a [`TsDocument`] that mirrors the XML file;
//! the catalog loader turns it into a [`crate::Catalog`]. The template parser
//! splits translation text into literal runs and `%` placeholders.

pub mod ast;
pub mod error;
mod escape;
mod file;
mod template;
mod writer;
mod xml;

pub use ast::*;
pub use error::ParseError;
pub use escape::{escape, unescape};
pub use file::{parse_document, parse_document_bytes};
pub use template::parse_template;
pub use writer::write_document;
