//! The lookup facade: (context, source, quantity, args) to display text.

use tracing::trace;

use crate::catalog::{Catalog, plural_index, render_lenient};

/// Translate `source` in `context`, choosing a plural form and filling
/// placeholders.
///
/// Resolution:
/// - A finished entry supplies the template. Plural entries use the form
///   selected by `quantity` in the catalog's language, clamped to the last
///   form; without a quantity the first form is used.
/// - A missing, unfinished, vanished or empty translation falls back to
///   `source` itself.
///
/// The template is then rendered with `%n` = `quantity` and `%k` =
/// `args[k - 1]`. Placeholders without an argument are kept literally and
/// logged, so this function never fails.
///
/// ```
/// use tscat::{Catalog, translate};
///
/// let catalog = Catalog::load_str(r#"<TS language="zh_CN"><context>
///     <name>OffroadHome</name>
///     <message numerus="yes">
///         <source>%n minute(s) ago</source>
///         <translation><numerusform>%n 分钟前</numerusform></translation>
///     </message>
/// </context></TS>"#).unwrap();
///
/// let text = translate(&catalog, "OffroadHome", "%n minute(s) ago", Some(3), &[] as &[&str]);
/// assert_eq!(text, "3 分钟前");
/// ```
pub fn translate<S: AsRef<str>>(
    catalog: &Catalog,
    context: &str,
    source: &str,
    quantity: Option<i64>,
    args: &[S],
) -> String {
    let template = select_template(catalog, context, source, quantity).unwrap_or_else(|| {
        trace!(context, source, language = catalog.language(), "no translation, using source");
        source
    });
    render_lenient(template, quantity, args)
}

/// Find the translated template for a key, if one may be served.
fn select_template<'c>(
    catalog: &'c Catalog,
    context: &str,
    source: &str,
    quantity: Option<i64>,
) -> Option<&'c str> {
    let entry = catalog
        .get(context, source)
        .filter(|entry| entry.status.is_finished())?;
    let index = match quantity {
        Some(n) if entry.is_plural => plural_index(catalog.language(), n),
        _ => 0,
    };
    entry.variant(index).filter(|text| !text.is_empty())
}

impl Catalog {
    /// The translated template [`translate`] would render for a key, before
    /// placeholder substitution.
    ///
    /// Returns `None` when the lookup falls back to the source text.
    pub fn template_for(&self, context: &str, source: &str, quantity: Option<i64>) -> Option<&str> {
        select_template(self, context, source, quantity)
    }

    /// Translate with an optional quantity and positional arguments.
    ///
    /// See [`translate`].
    pub fn translate<S: AsRef<str>>(
        &self,
        context: &str,
        source: &str,
        quantity: Option<i64>,
        args: &[S],
    ) -> String {
        translate(self, context, source, quantity, args)
    }

    /// Translate a message that takes no quantity or arguments.
    pub fn tr(&self, context: &str, source: &str) -> String {
        translate::<&str>(self, context, source, None, &[])
    }

    /// Translate a plural message with its quantity.
    pub fn tr_n(&self, context: &str, source: &str, quantity: i64) -> String {
        translate::<&str>(self, context, source, Some(quantity), &[])
    }
}
