//! Static checks over loaded catalogs.
//!
//! Detects translations that will render badly at runtime: wrong plural form
//! counts, placeholders that do not match the source, finished entries with
//! no text, and catalogs that drifted apart from their source catalog.

use crate::catalog::{Catalog, LoadWarning, plural_form_count};
use crate::parser::{Template, parse_template};
use crate::types::Entry;

/// Runs the lint rules over every live entry of a catalog.
///
/// Vanished entries are skipped. Warnings come out in catalog order.
///
/// ```
/// use tscat::{Catalog, LoadWarning, lint_catalog};
///
/// let catalog = Catalog::load_str(r#"<TS language="de"><context>
///     <name>DevicePanel</name>
///     <message><source>Uninstall %1</source><translation>Deinstallieren</translation></message>
/// </context></TS>"#).unwrap();
///
/// let warnings = lint_catalog(&catalog);
/// assert!(matches!(warnings[0], LoadWarning::PlaceholderMismatch { .. }));
/// ```
pub fn lint_catalog(catalog: &Catalog) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    for entry in catalog.entries().filter(|entry| !entry.status.is_vanished()) {
        let source = parse_template(&entry.source);
        lint_numerus_without_quantity(entry, &source, &mut warnings);
        if !entry.status.is_finished() {
            continue;
        }
        lint_plural_form_count(entry, catalog.language(), &mut warnings);
        lint_empty_translation(entry, &mut warnings);
        lint_placeholder_mismatch(entry, &source, &mut warnings);
    }
    warnings
}

/// Compares a translated catalog against the catalog of its source language.
///
/// Reports source messages that have no finished translation in `target`
/// ([`LoadWarning::MissingMessage`]) and target messages that the source
/// does not define ([`LoadWarning::UnknownMessage`]). Vanished entries are
/// ignored on both sides.
pub fn validate_against(source: &Catalog, target: &Catalog) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    for entry in source.entries().filter(|entry| !entry.status.is_vanished()) {
        let translated = target
            .get(&entry.context, &entry.source)
            .is_some_and(Entry::is_servable);
        if !translated {
            warnings.push(LoadWarning::MissingMessage {
                context: entry.context.clone(),
                source_text: entry.source.clone(),
                language: target.language().to_string(),
            });
        }
    }

    for entry in target.entries().filter(|entry| !entry.status.is_vanished()) {
        let known = source
            .get(&entry.context, &entry.source)
            .is_some_and(|found| !found.status.is_vanished());
        if !known {
            warnings.push(LoadWarning::UnknownMessage {
                context: entry.context.clone(),
                source_text: entry.source.clone(),
                language: target.language().to_string(),
            });
        }
    }

    warnings
}

fn lint_numerus_without_quantity(entry: &Entry, source: &Template, warnings: &mut Vec<LoadWarning>) {
    if entry.is_plural && !source.uses_quantity() {
        warnings.push(LoadWarning::NumerusWithoutQuantity {
            context: entry.context.clone(),
            source_text: entry.source.clone(),
        });
    }
}

fn lint_plural_form_count(entry: &Entry, language: &str, warnings: &mut Vec<LoadWarning>) {
    if !entry.is_plural {
        return;
    }
    let expected = plural_form_count(language);
    if entry.variants.len() != expected {
        warnings.push(LoadWarning::PluralFormCount {
            context: entry.context.clone(),
            source_text: entry.source.clone(),
            language: language.to_string(),
            expected,
            found: entry.variants.len(),
        });
    }
}

fn lint_empty_translation(entry: &Entry, warnings: &mut Vec<LoadWarning>) {
    if entry.variants.iter().any(String::is_empty) {
        warnings.push(LoadWarning::EmptyTranslation {
            context: entry.context.clone(),
            source_text: entry.source.clone(),
        });
    }
}

/// Reports the first non-empty variant whose placeholders differ from the
/// source's. `%n` only counts for plural entries.
fn lint_placeholder_mismatch(entry: &Entry, source: &Template, warnings: &mut Vec<LoadWarning>) {
    let expected = placeholders(source, entry.is_plural);
    let mismatch = entry
        .variants
        .iter()
        .filter(|variant| !variant.is_empty())
        .map(|variant| placeholders(&parse_template(variant), entry.is_plural))
        .find(|found| *found != expected);

    if let Some(found) = mismatch {
        warnings.push(LoadWarning::PlaceholderMismatch {
            context: entry.context.clone(),
            source_text: entry.source.clone(),
            source_placeholders: expected,
            translation_placeholders: found,
        });
    }
}

fn placeholders(template: &Template, include_quantity: bool) -> Vec<String> {
    let mut names: Vec<String> = template
        .argument_indices()
        .into_iter()
        .map(|index| format!("%{index}"))
        .collect();
    if include_quantity && template.uses_quantity() {
        names.push("%n".to_string());
    }
    names
}
