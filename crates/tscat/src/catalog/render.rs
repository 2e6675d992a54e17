//! Placeholder substitution.
//!
//! Fills `%1`..`%9` with positional arguments and `%n` with the quantity of a
//! plural message. Markup embedded in translations (`<b>`, `<br>`) passes
//! through untouched; arguments are inserted as-is.

use tracing::warn;

use crate::catalog::RenderError;
use crate::parser::{Segment, Template, parse_template};

/// Render a template string, failing on unsatisfied placeholders.
///
/// `%n` is replaced by the decimal form of `quantity`; without a quantity it is
/// left as written. `%k` is replaced by `args[k - 1]`.
///
/// ```
/// use tscat::{RenderError, render};
///
/// assert_eq!(
///     render("<b>%n segment(s)</b> for %1", Some(5), &["you"]).unwrap(),
///     "<b>5 segment(s)</b> for you"
/// );
/// assert_eq!(
///     render("%1 and %2", None, &["one"]),
///     Err(RenderError::MissingArgument { index: 2, supplied: 1 })
/// );
/// ```
pub fn render<S: AsRef<str>>(
    template: &str,
    quantity: Option<i64>,
    args: &[S],
) -> Result<String, RenderError> {
    render_template(&parse_template(template), quantity, args)
}

/// Render an already parsed template, failing on unsatisfied placeholders.
pub fn render_template<S: AsRef<str>>(
    template: &Template,
    quantity: Option<i64>,
    args: &[S],
) -> Result<String, RenderError> {
    let (text, missing) = render_segments(template, quantity, args);
    match missing.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(text),
    }
}

/// Render a template string, keeping unsatisfied placeholders literally.
///
/// Each unsatisfied `%k` is logged as a warning. This is the policy used by
/// [`crate::translate`], which must always produce text.
///
/// ```
/// use tscat::render_lenient;
///
/// assert_eq!(render_lenient("%1 of %2", None, &["3"]), "3 of %2");
/// ```
pub fn render_lenient<S: AsRef<str>>(template: &str, quantity: Option<i64>, args: &[S]) -> String {
    let (text, missing) = render_segments(&parse_template(template), quantity, args);
    for error in &missing {
        warn!(%error, template, "leaving placeholder unsubstituted");
    }
    text
}

/// Fill placeholders, collecting the ones that have no argument.
///
/// Unsatisfied `%k` tokens are written back literally.
fn render_segments<S: AsRef<str>>(
    template: &Template,
    quantity: Option<i64>,
    args: &[S],
) -> (String, Vec<RenderError>) {
    let mut output = String::new();
    let mut missing = Vec::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Quantity => match quantity {
                Some(n) => output.push_str(&n.to_string()),
                None => output.push_str("%n"),
            },
            Segment::Argument(index) => match args.get(usize::from(index.saturating_sub(1))) {
                Some(arg) => output.push_str(arg.as_ref()),
                None => {
                    output.push('%');
                    output.push_str(&index.to_string());
                    missing.push(RenderError::MissingArgument {
                        index: *index,
                        supplied: args.len(),
                    });
                }
            },
        }
    }
    (output, missing)
}
