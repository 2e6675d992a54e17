//! Placeholder template parser using winnow.
//!
//! Splits translation text into literal runs and placeholders:
//! - `%1`..`%9` positional arguments (a single digit; `%10` is `%1` then `0`)
//! - `%n` the quantity of a plural message
//!
//! Every other `%` is literal text, so parsing cannot fail.

use super::ast::*;
use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_till};

/// Parse a template string into segments.
///
/// ```
/// use tscat::parser::{Segment, parse_template};
///
/// let template = parse_template("%n items in %1 (100%)");
/// assert_eq!(template.segments[0], Segment::Quantity);
/// assert_eq!(template.segments[2], Segment::Argument(1));
/// assert_eq!(template.segments[3], Segment::Literal(" (100%)".to_string()));
/// ```
pub fn parse_template(input: &str) -> Template {
    match template.parse(input) {
        Ok(template) => template,
        // The grammar accepts every input; keep the text if that ever changes.
        Err(_) => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Parse a single segment (placeholder, literal run, or stray `%`).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_run, any.map(|c: char| Segment::Literal(c.to_string()))))
        .parse_next(input)
}

/// Parse `%n` or `%1`..`%9`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    preceded(
        '%',
        alt((
            'n'.value(Segment::Quantity),
            one_of('1'..='9').map(|digit: char| {
                // one_of guarantees an ASCII digit 1..=9
                Segment::Argument(digit as u8 - b'0')
            }),
        )),
    )
    .parse_next(input)
}

/// Parse text up to the next `%`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., '%')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ (Segment::Argument(_) | Segment::Quantity) => result.push(other),
        }
    }

    result
}
