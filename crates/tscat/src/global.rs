//! Process-wide catalog for the `global-catalog` feature.
//!
//! Holds the current catalog behind a lock so application code can call
//! [`tr`] without threading a `&Catalog` through every layer.

use std::mem;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::{Catalog, translate};

static GLOBAL_CATALOG: LazyLock<RwLock<Arc<Catalog>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Catalog::new("en"))));

/// Installs a catalog as the process-wide current catalog.
///
/// Returns the previously installed one. Readers that already hold a handle
/// from [`current`] keep using it.
pub fn install(catalog: impl Into<Arc<Catalog>>) -> Arc<Catalog> {
    let mut guard = GLOBAL_CATALOG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    mem::replace(&mut *guard, catalog.into())
}

/// Returns a handle to the current catalog.
pub fn current() -> Arc<Catalog> {
    let guard = GLOBAL_CATALOG
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Translates a message that takes no quantity or arguments.
pub fn tr(context: &str, source: &str) -> String {
    current().tr(context, source)
}

/// Translates with a quantity and positional arguments.
pub fn tr_n<S: AsRef<str>>(context: &str, source: &str, quantity: i64, args: &[S]) -> String {
    translate(&current(), context, source, Some(quantity), args)
}
