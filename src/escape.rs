//! Entity encoding for text content and attribute values.
//!
//! Text content only needs `&` and `<` escaped. Attribute values are always
//! emitted inside double quotes, so `"` is escaped there as well. `>` is
//! left alone in both contexts.

use std::borrow::Cow;

/// Escapes `&` and `<` in text content.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use xmlrender::escape::escape_text;
///
/// assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c > d");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape_with(text, |ch| matches!(ch, '&' | '<'))
}

/// Escapes `&`, `<` and `"` in a quote-delimited attribute value.
///
/// # Examples
///
/// ```
/// use xmlrender::escape::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"say "hi" & <go>"#), "say &quot;hi&quot; &amp; &lt;go>");
/// ```
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape_with(value, |ch| matches!(ch, '&' | '<' | '"'))
}

/// Appends `text` to `out` with text-content escaping.
pub fn write_escaped_text(out: &mut String, text: &str) {
    out.push_str(&escape_text(text));
}

/// Appends `value` to `out` with attribute-value escaping.
pub fn write_escaped_attribute(out: &mut String, value: &str) {
    out.push_str(&escape_attribute(value));
}

fn escape_with(input: &str, needs_escape: impl Fn(char) -> bool) -> Cow<'_, str> {
    let Some(first) = input.find(&needs_escape) else {
        return Cow::Borrowed(input);
    };

    let (clean, rest) = input.split_at(first);
    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(clean);

    for ch in rest.chars() {
        match ch {
            '&' if needs_escape(ch) => out.push_str("&amp;"),
            '<' if needs_escape(ch) => out.push_str("&lt;"),
            '"' if needs_escape(ch) => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }

    Cow::Owned(out)
}
