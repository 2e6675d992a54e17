//! CLI command implementations.

mod check;
mod coverage;
mod lint;
mod lookup;
mod normalize;

use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use tscat::parser::parse_document_bytes;
use tscat::{Catalog, LoadOptions};

use crate::output::TsDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use lint::{run_lint, LintArgs};
pub use lookup::{run_lookup, LookupArgs};
pub use normalize::{run_normalize, NormalizeArgs};

/// Read and load a `.ts` file, reporting parse errors with source context.
fn load_catalog(path: &Path, options: &LoadOptions) -> Result<Catalog> {
    let bytes = fs::read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    match parse_document_bytes(&bytes) {
        Ok(document) => Ok(Catalog::from_document(document, options)),
        Err(e) => {
            let content = String::from_utf8_lossy(&bytes);
            Err(TsDiagnostic::from_parse_error(path, &content, &e).into())
        }
    }
}
