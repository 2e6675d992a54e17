//! `.ts` document parser.
//!
//! Reads the XML tree and maps it onto [`TsDocument`]. Elements Qt Linguist
//! may write but that carry nothing for lookup (`<userdata>`, `<extra-*>`,
//! `<dependencies>`) are skipped.

use std::str;

use super::ast::*;
use super::error::{ParseError, calculate_position};
use super::xml::{Element, parse_xml};
use crate::types::{Location, Status};

/// Parse an entire `.ts` file into a [`TsDocument`].
///
/// Fails when the input is not well-formed XML, when the root element is not
/// `<TS>`, or when a context or message lacks its required child.
pub fn parse_document(input: &str) -> Result<TsDocument, ParseError> {
    let root = parse_xml(input)?;
    if root.name != "TS" {
        return Err(structure_error(
            input,
            &root,
            format!("expected root element <TS>, found <{}>", root.name),
        ));
    }

    let contexts = root
        .elements()
        .filter(|element| element.name == "context")
        .map(|element| context_block(input, element))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TsDocument {
        version: root.attribute("version").map(ToString::to_string),
        language: root
            .attribute("language")
            .filter(|language| !language.is_empty())
            .map(ToString::to_string),
        source_language: root
            .attribute("sourcelanguage")
            .filter(|language| !language.is_empty())
            .map(ToString::to_string),
        contexts,
    })
}

/// Parse a `.ts` file read as raw bytes.
///
/// Fails with [`ParseError::InvalidUtf8`] when the bytes are not UTF-8.
pub fn parse_document_bytes(input: &[u8]) -> Result<TsDocument, ParseError> {
    let text = str::from_utf8(input).map_err(|_| ParseError::InvalidUtf8)?;
    parse_document(text)
}

fn structure_error(input: &str, element: &Element, message: String) -> ParseError {
    let (line, column) = calculate_position(input, element.remaining);
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Map a `<context>` element.
fn context_block(input: &str, element: &Element) -> Result<ContextBlock, ParseError> {
    let mut name = None;
    let mut comment = None;
    let mut messages = Vec::new();

    for child in element.elements() {
        match child.name.as_str() {
            "name" => name = Some(child.text()),
            "comment" => comment = Some(child.text()),
            "message" => messages.push(message(input, child)?),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| {
        structure_error(input, element, "<context> without <name>".to_string())
    })?;

    Ok(ContextBlock {
        name,
        comment,
        messages,
    })
}

/// Map a `<message>` element.
fn message(input: &str, element: &Element) -> Result<MessageNode, ParseError> {
    let mut node = MessageNode {
        id: element.attribute("id").map(ToString::to_string),
        numerus: element.attribute("numerus") == Some("yes"),
        ..MessageNode::default()
    };
    let mut source = None;

    for child in element.elements() {
        match child.name.as_str() {
            "source" => source = Some(child.text()),
            "oldsource" => node.old_source = Some(child.text()),
            "comment" => node.comment = Some(child.text()),
            "oldcomment" => node.old_comment = Some(child.text()),
            "extracomment" => node.extra_comment = Some(child.text()),
            "translatorcomment" => node.translator_comment = Some(child.text()),
            "location" => node.locations.push(Location {
                filename: child.attribute("filename").map(ToString::to_string),
                line: child.attribute("line").map(ToString::to_string),
            }),
            "translation" => node.translation = Some(translation(input, child)?),
            _ => {}
        }
    }

    node.source = source.ok_or_else(|| {
        structure_error(input, element, "<message> without <source>".to_string())
    })?;
    Ok(node)
}

/// Map a `<translation>` element.
fn translation(input: &str, element: &Element) -> Result<TranslationNode, ParseError> {
    let kind = element.attribute("type").unwrap_or_default();
    let status = Status::from_type_attribute(kind).ok_or_else(|| {
        structure_error(
            input,
            element,
            format!("unknown translation type '{kind}'"),
        )
    })?;

    let numerus_forms: Vec<String> = element
        .elements()
        .filter(|child| child.name == "numerusform")
        .map(length_variant_text)
        .collect();

    let forms = if numerus_forms.is_empty() {
        vec![length_variant_text(element)]
    } else {
        numerus_forms
    };

    Ok(TranslationNode { status, forms })
}

/// Text of an element, using its first `<lengthvariant>` when it has any.
fn length_variant_text(element: &Element) -> String {
    element
        .elements()
        .find(|child| child.name == "lengthvariant")
        .map_or_else(|| element.text(), Element::text)
}
