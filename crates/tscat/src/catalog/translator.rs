//! Language management over several catalogs.
//!
//! The Translator struct provides the user-facing API for loading catalogs,
//! switching the current language, and translating against it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, warn};

use crate::catalog::{Catalog, LoadError, LoadOptions, LoadWarning, translate, validate_against};

/// Owns one catalog per language and tracks the current language.
///
/// Catalogs are held as `Arc<Catalog>` snapshots. Loading a language builds a
/// fresh catalog and swaps it in only when parsing succeeded, so readers that
/// cloned the previous handle keep a consistent view and a failed reload
/// leaves the old translations in place.
///
/// # Example
///
/// ```
/// use tscat::Translator;
///
/// let mut translator = Translator::builder().language("zh_CN").build();
/// translator.load_str("zh_CN", r#"<TS language="zh_CN"><context>
///     <name>AbstractAlert</name>
///     <message><source>Close</source><translation>关闭</translation></message>
/// </context></TS>"#).unwrap();
///
/// assert_eq!(translator.tr("AbstractAlert", "Close"), "关闭");
/// translator.set_language("en");
/// assert_eq!(translator.tr("AbstractAlert", "Close"), "Close");
/// ```
#[derive(Debug, Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Current language tag (e.g., "zh_CN", "de").
    #[builder(default = "en".to_string())]
    language: String,

    /// Options applied to every load.
    #[builder(default)]
    load_options: LoadOptions,

    /// Loaded catalogs by language tag.
    #[builder(skip)]
    catalogs: HashMap<String, Arc<Catalog>>,

    /// File paths for reload support: language -> PathBuf.
    /// Only populated for file-loaded catalogs, not string-loaded.
    #[builder(skip)]
    loaded_paths: HashMap<String, PathBuf>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a new Translator with default settings (English).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Translator with the specified language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Translator::builder().language(language.into()).build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Get the current language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the current language.
    ///
    /// This does not load anything; switching to a language without a catalog
    /// makes every lookup fall back to its source text.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        if !self.catalogs.contains_key(&self.language) {
            warn!(language = %self.language, "no catalog loaded for language");
        }
    }

    /// Languages with a loaded catalog, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    // =========================================================================
    // Catalog Access
    // =========================================================================

    /// Handle to the catalog of the current language.
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        self.catalog_for(&self.language)
    }

    /// Handle to the catalog of a specific language.
    pub fn catalog_for(&self, language: &str) -> Option<Arc<Catalog>> {
        self.catalogs.get(language).cloned()
    }

    /// Install an already built catalog for a language, replacing any previous
    /// one. Returns the shared handle.
    pub fn install(&mut self, language: &str, catalog: Catalog) -> Arc<Catalog> {
        let catalog = Arc::new(catalog);
        self.catalogs
            .insert(language.to_string(), Arc::clone(&catalog));
        catalog
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load a `.ts` file for a language.
    ///
    /// The path is stored for later [`Translator::reload`]. On success the
    /// language's previous catalog is replaced wholesale and the number of
    /// entries is returned; on failure it is kept.
    pub fn load_file(&mut self, language: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let options = self.load_options.with_default_language(language);
        let catalog = Catalog::load_file_with(path, &options)?;
        let count = catalog.len();
        debug!(language, path = %path.display(), entries = count, "installed catalog from file");

        self.install(language, catalog);
        self.loaded_paths
            .insert(language.to_string(), path.to_path_buf());
        Ok(count)
    }

    /// Load `.ts` markup for a language.
    ///
    /// Catalogs loaded this way cannot be reloaded via [`Translator::reload`].
    pub fn load_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        let options = self.load_options.with_default_language(language);
        let catalog = Catalog::load_str_with(content, &options)?;
        let count = catalog.len();

        self.install(language, catalog);
        self.loaded_paths.remove(language);
        Ok(count)
    }

    /// Reload a language from the file it was loaded from.
    ///
    /// Returns an error if the catalog was loaded from a string or never
    /// loaded. A parse failure keeps the previously loaded catalog.
    pub fn reload(&mut self, language: &str) -> Result<usize, LoadError> {
        let path =
            self.loaded_paths
                .get(language)
                .cloned()
                .ok_or_else(|| LoadError::NoPathForReload {
                    language: language.to_string(),
                })?;

        self.load_file(language, path)
    }

    /// Remove the catalog of a language. Returns whether one was loaded.
    pub fn unload(&mut self, language: &str) -> bool {
        self.loaded_paths.remove(language);
        self.catalogs.remove(language).is_some()
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate against the current language's catalog.
    ///
    /// Without a catalog the source text is rendered with the given quantity
    /// and arguments.
    pub fn translate<S: AsRef<str>>(
        &self,
        context: &str,
        source: &str,
        quantity: Option<i64>,
        args: &[S],
    ) -> String {
        match self.catalogs.get(&self.language) {
            Some(catalog) => translate(catalog, context, source, quantity, args),
            None => translate(&Catalog::new(self.language.as_str()), context, source, quantity, args),
        }
    }

    /// Translate a message that takes no quantity or arguments.
    pub fn tr(&self, context: &str, source: &str) -> String {
        self.translate::<&str>(context, source, None, &[])
    }

    /// Compare a target language's catalog against a source language's.
    ///
    /// Both languages must already be loaded. Returns an empty vector if
    /// either language is not loaded.
    pub fn validate(&self, source_language: &str, target_language: &str) -> Vec<LoadWarning> {
        let (Some(source), Some(target)) = (
            self.catalogs.get(source_language),
            self.catalogs.get(target_language),
        ) else {
            return Vec::new();
        };
        validate_against(source, target)
    }
}
