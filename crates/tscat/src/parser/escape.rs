//! XML character escapes used by `.ts` files.

use std::borrow::Cow;

/// Replace XML entity and character references with the characters they name.
///
/// Handles the five predefined entities plus decimal (`&#10;`) and hex
/// (`&#x9;`) character references. Anything else that starts with `&` is
/// kept verbatim.
///
/// ```
/// use tscat::parser::unescape;
///
/// assert_eq!(unescape("Don&apos;t &lt;b&gt;panic&lt;/b&gt;"), "Don't <b>panic</b>");
/// assert_eq!(unescape("tab&#x9;end"), "tab\tend");
/// assert_eq!(unescape("R&D"), "R&D");
/// ```
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match candidate.find(';').and_then(|end| {
            decode_reference(&candidate[1..end]).map(|c| (c, end))
        }) {
            Some((c, end)) => {
                output.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                output.push('&');
                rest = &candidate[1..];
            }
        }
    }
    output.push_str(rest);
    Cow::Owned(output)
}

/// Decode the body of a reference (the text between `&` and `;`).
fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Escape text for use in `.ts` element content or attribute values.
///
/// All five predefined entities are written, matching what Qt Linguist emits.
/// Control characters other than tab and newline become character references.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&apos;"),
            c if needs_escape(c) => output.push_str(&format!("&#x{:x};", u32::from(c))),
            c => output.push(c),
        }
    }
    Cow::Owned(output)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'') || (c.is_control() && c != '\n' && c != '\t')
}
