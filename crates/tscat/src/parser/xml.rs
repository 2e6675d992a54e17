//! Minimal XML reader using winnow.
//!
//! Covers the subset of XML that Qt Linguist writes: a prolog with an
//! optional declaration and `<!DOCTYPE TS>`, comments, processing
//! instructions, elements with quoted attributes, character data with entity
//! references, and CDATA sections. Namespaces and DTD internal subsets are
//! not interpreted.

use winnow::ascii::{multispace0, multispace1};
use winnow::combinator::{alt, cut_err, delimited, fail, opt, preceded, repeat, terminated};
use winnow::error::{ContextError, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{take_till, take_until, take_while};

use super::error::{ParseError, calculate_position};
use super::escape::unescape;

/// Deepest element nesting accepted. `.ts` documents use five levels.
const MAX_DEPTH: usize = 64;

/// An element node with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// Length of the input remaining at the element's `<`, for diagnostics.
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated character data of this element.
    ///
    /// Qt encodes characters that XML 1.0 cannot carry as `<byte value="x1"/>`;
    /// those are decoded here. Other child elements contribute nothing.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Text(chunk) => text.push_str(chunk),
                Node::Element(element) if element.name == "byte" => {
                    if let Some(c) = element.attribute("value").and_then(decode_byte) {
                        text.push(c);
                    }
                }
                Node::Element(_) => {}
            }
        }
        text
    }
}

fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// Parse a complete XML document and return its root element.
pub(crate) fn parse_xml(input: &str) -> Result<Element, ParseError> {
    let mut remaining = input;
    match document(&mut remaining) {
        Ok(root) => {
            if remaining.is_empty() {
                Ok(root)
            } else {
                let (line, column) = calculate_position(input, remaining.len());
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: "unexpected content after the root element".to_string(),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining.len());
            if remaining.trim().is_empty() {
                return Err(ParseError::UnexpectedEof { line, column });
            }
            let message = match e.into_inner() {
                Ok(inner) => describe(&inner),
                Err(_) => "incomplete input".to_string(),
            };
            Err(ParseError::Syntax {
                line,
                column,
                message,
            })
        }
    }
}

fn describe(error: &ContextError) -> String {
    let message = error.to_string();
    if message.is_empty() {
        "malformed markup".to_string()
    } else {
        message
    }
}

fn expected(description: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(description))
}

/// Parse prolog, root element and trailing misc.
fn document(input: &mut &str) -> ModalResult<Element> {
    let _ = opt('\u{feff}').parse_next(input)?;
    misc(input)?;
    let _ = opt(terminated(doctype, misc)).parse_next(input)?;
    let root = (|input: &mut &str| element(input, 1))
        .context(expected("root element"))
        .parse_next(input)?;
    misc(input)?;
    Ok(root)
}

/// Skip whitespace, comments and processing instructions.
fn misc(input: &mut &str) -> ModalResult<()> {
    repeat(
        0..,
        alt((
            multispace1.void(),
            comment.void(),
            processing_instruction.void(),
        )),
    )
    .parse_next(input)
}

/// Parse `<!-- ... -->`.
fn comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(
        "<!--",
        cut_err(terminated(take_until(0.., "-->"), "-->")).context(expected("'-->'")),
    )
    .parse_next(input)
}

/// Parse `<?target ... ?>`, including the XML declaration.
fn processing_instruction<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(
        "<?",
        cut_err(terminated(take_until(0.., "?>"), "?>")).context(expected("'?>'")),
    )
    .parse_next(input)
}

/// Parse `<!DOCTYPE ...>` without an internal subset.
fn doctype<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(
        "<!DOCTYPE",
        cut_err(terminated(take_till(0.., '>'), '>')).context(expected("'>'")),
    )
    .parse_next(input)
}

/// Parse `<![CDATA[ ... ]]>`, returning the raw content.
fn cdata<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded(
        "<![CDATA[",
        cut_err(terminated(take_until(0.., "]]>"), "]]>")).context(expected("']]>'")),
    )
    .parse_next(input)
}

/// Parse one child node of an element nested at `depth`.
fn node(input: &mut &str, depth: usize) -> ModalResult<Option<Node>> {
    alt((
        comment.map(|_| None),
        processing_instruction.map(|_| None),
        cdata.map(|raw| Some(Node::Text(raw.to_string()))),
        (|input: &mut &str| element(input, depth)).map(|e| Some(Node::Element(e))),
        character_data.map(|text| Some(Node::Text(text))),
    ))
    .parse_next(input)
}

/// Parse a run of character data up to the next `<`.
fn character_data(input: &mut &str) -> ModalResult<String> {
    take_till(1.., '<')
        .map(|raw: &str| unescape(raw).into_owned())
        .parse_next(input)
}

/// Parse an element with its attributes and children.
///
/// `depth` counts the root as 1. Past [`MAX_DEPTH`] the parse fails instead
/// of recursing further.
fn element(input: &mut &str, depth: usize) -> ModalResult<Element> {
    let remaining = input.len();
    '<'.parse_next(input)?;
    let name = tag_name(input)?.to_string();
    if depth > MAX_DEPTH {
        return cut_err(fail::<_, Element, _>)
            .context(StrContext::Label("element nesting"))
            .context(expected("at most 64 nested elements"))
            .parse_next(input);
    }

    let attributes: Vec<(String, String)> =
        repeat(0.., preceded(multispace1, attribute)).parse_next(input)?;
    multispace0(input)?;

    if opt("/>").parse_next(input)?.is_some() {
        return Ok(Element {
            name,
            attributes,
            children: Vec::new(),
            remaining,
        });
    }
    cut_err('>')
        .context(expected("'>' closing the start tag"))
        .parse_next(input)?;

    let nodes: Vec<Option<Node>> =
        repeat(0.., |input: &mut &str| node(input, depth + 1)).parse_next(input)?;
    let children = merge_text(nodes.into_iter().flatten());

    cut_err(closing_tag(&name))
        .context(expected("matching end tag"))
        .parse_next(input)?;

    Ok(Element {
        name,
        attributes,
        children,
        remaining,
    })
}

/// Parse `</name>` for the given element name.
fn closing_tag<'n>(name: &'n str) -> impl FnMut(&mut &str) -> ModalResult<()> + 'n {
    move |input: &mut &str| {
        (
            "</",
            tag_name.verify(|found: &str| found == name),
            multispace0,
            '>',
        )
            .void()
            .parse_next(input)
    }
}

/// Parse `name="value"` or `name='value'`.
fn attribute(input: &mut &str) -> ModalResult<(String, String)> {
    let key = tag_name(input)?;
    (multispace0, '=', multispace0).parse_next(input)?;
    let value = alt((
        delimited('"', take_till(0.., '"'), '"'),
        delimited('\'', take_till(0.., '\''), '\''),
    ))
    .parse_next(input)?;
    Ok((key.to_string(), unescape(value).into_owned()))
}

fn tag_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.')
    })
    .parse_next(input)
}

/// Merge adjacent text nodes (character data split by comments or CDATA).
fn merge_text(nodes: impl Iterator<Item = Node>) -> Vec<Node> {
    let mut result: Vec<Node> = Vec::new();
    for node in nodes {
        match node {
            Node::Text(text) => {
                if let Some(Node::Text(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Node::Text(text));
                }
            }
            other @ Node::Element(_) => result.push(other),
        }
    }
    result
}
