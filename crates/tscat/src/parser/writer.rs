//! Serializes a catalog back into `.ts` markup.

use super::escape::escape;
use crate::catalog::Catalog;
use crate::types::Entry;

/// Write a catalog as a `.ts` document in the layout Qt Linguist uses.
///
/// Contexts and messages keep their first-appearance order. Duplicates that
/// the loader collapsed are written once, so loading the output produces an
/// equal catalog.
pub fn write_document(catalog: &Catalog) -> String {
    let mut out = String::new();
    line(&mut out, 0, r#"<?xml version="1.0" encoding="utf-8"?>"#);
    line(&mut out, 0, "<!DOCTYPE TS>");

    let mut root = String::from("<TS");
    if let Some(version) = catalog.version() {
        root.push_str(&format!(r#" version="{}""#, escape(version)));
    }
    root.push_str(&format!(r#" language="{}""#, escape(catalog.language())));
    if let Some(source_language) = catalog.source_language() {
        root.push_str(&format!(r#" sourcelanguage="{}""#, escape(source_language)));
    }
    root.push('>');
    line(&mut out, 0, &root);

    for context in catalog.contexts() {
        line(&mut out, 0, "<context>");
        line(&mut out, 1, &element("name", context.name()));
        if let Some(comment) = context.comment() {
            line(&mut out, 1, &element("comment", comment));
        }
        for entry in context.entries() {
            write_message(&mut out, entry);
        }
        line(&mut out, 0, "</context>");
    }

    line(&mut out, 0, "</TS>");
    out
}

fn write_message(out: &mut String, entry: &Entry) {
    let mut open = String::from("<message");
    if let Some(id) = &entry.id {
        open.push_str(&format!(r#" id="{}""#, escape(id)));
    }
    if entry.is_plural {
        open.push_str(r#" numerus="yes""#);
    }
    open.push('>');
    line(out, 1, &open);

    for location in &entry.locations {
        let mut tag = String::from("<location");
        if let Some(filename) = &location.filename {
            tag.push_str(&format!(r#" filename="{}""#, escape(filename)));
        }
        if let Some(number) = &location.line {
            tag.push_str(&format!(r#" line="{}""#, escape(number)));
        }
        tag.push_str("/>");
        line(out, 2, &tag);
    }
    line(out, 2, &element("source", &entry.source));
    let comments = [
        ("oldsource", &entry.old_source),
        ("comment", &entry.comment),
        ("oldcomment", &entry.old_comment),
        ("extracomment", &entry.extra_comment),
        ("translatorcomment", &entry.translator_comment),
    ];
    for (name, text) in comments {
        if let Some(text) = text {
            line(out, 2, &element(name, text));
        }
    }

    let open_translation = match entry.status.type_attribute() {
        Some(kind) => format!(r#"<translation type="{kind}">"#),
        None => "<translation>".to_string(),
    };
    if entry.is_plural {
        line(out, 2, &open_translation);
        for form in &entry.variants {
            line(out, 3, &element("numerusform", form));
        }
        line(out, 2, "</translation>");
    } else {
        let text = entry.variants.first().map(String::as_str).unwrap_or_default();
        line(
            out,
            2,
            &format!("{open_translation}{}</translation>", escape(text)),
        );
    }

    line(out, 1, "</message>");
}

fn element(name: &str, text: &str) -> String {
    format!("<{name}>{}</{name}>", escape(text))
}

fn line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(text);
    out.push('\n');
}
