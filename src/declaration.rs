//! XML declaration and DOCTYPE formatting.

use crate::node::Attributes;
use crate::render::render_attributes;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

pub const DEFAULT_XML_VERSION: &str = "1.0";
pub const DEFAULT_ENCODING: &str = "UTF-8";
pub const DEFAULT_DOCTYPE_ROOT: &str = "XML";

/// Characters percent-escaped in a DOCTYPE system identifier.
///
/// `CONTROLS` covers 0x00-0x1F and 0x7F; bytes above 0x7F are always escaped
/// by `utf8_percent_encode`.
const SYSTEM_URI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// An `<?xml ...?>` declaration.
///
/// # Examples
///
/// ```
/// use xmlrender::XmlDeclaration;
///
/// let decl = XmlDeclaration::default().standalone("yes");
/// assert_eq!(
///     decl.to_string(),
///     r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: String,
    pub standalone: Option<String>,
}

impl Default for XmlDeclaration {
    fn default() -> Self {
        Self {
            version: DEFAULT_XML_VERSION.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
            standalone: None,
        }
    }
}

impl XmlDeclaration {
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    #[must_use]
    pub fn standalone(mut self, standalone: impl Into<String>) -> Self {
        self.standalone = Some(standalone.into());
        self
    }
}

impl fmt::Display for XmlDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = Attributes::from_iter([
            ("version".to_string(), Some(self.version.clone())),
            ("encoding".to_string(), Some(self.encoding.clone())),
            ("standalone".to_string(), self.standalone.clone()),
        ]);
        write!(f, "<?xml{}?>", render_attributes(Some(&attributes)))
    }
}

/// Formats an XML declaration, defaulting to version `1.0` and `UTF-8`.
///
/// `standalone` is omitted entirely when `None`.
///
/// # Examples
///
/// ```
/// use xmlrender::xml_declaration;
///
/// assert_eq!(xml_declaration(None, None, None), r#"<?xml version="1.0" encoding="UTF-8"?>"#);
/// ```
#[must_use]
pub fn xml_declaration(
    version: Option<&str>,
    encoding: Option<&str>,
    standalone: Option<&str>,
) -> String {
    XmlDeclaration {
        version: version.unwrap_or(DEFAULT_XML_VERSION).to_string(),
        encoding: encoding.unwrap_or(DEFAULT_ENCODING).to_string(),
        standalone: standalone.map(str::to_string),
    }
    .to_string()
}

/// A `<!DOCTYPE ...>` declaration.
///
/// A public identifier selects the `PUBLIC` form, a lone system URI the
/// `SYSTEM` form. The internal subset is emitted verbatim between brackets.
/// Empty parts count as absent, and an empty root falls back to `XML`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctype {
    pub root: String,
    pub public_id: Option<String>,
    pub system_uri: Option<String>,
    pub internal_subset: Option<String>,
}

impl Default for Doctype {
    fn default() -> Self {
        Self::new(DEFAULT_DOCTYPE_ROOT)
    }
}

impl Doctype {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_id: None,
            system_uri: None,
            internal_subset: None,
        }
    }

    #[must_use]
    pub fn public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }

    #[must_use]
    pub fn system_uri(mut self, system_uri: impl Into<String>) -> Self {
        self.system_uri = Some(system_uri.into());
        self
    }

    #[must_use]
    pub fn internal_subset(mut self, subset: impl Into<String>) -> Self {
        self.internal_subset = Some(subset.into());
        self
    }
}

impl fmt::Display for Doctype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = non_empty(Some(&self.root)).unwrap_or(DEFAULT_DOCTYPE_ROOT);
        let quoted_uri = non_empty(self.system_uri.as_ref()).map(quote_system_uri);

        let mut parts: Vec<String> = vec![root.to_string()];
        match (non_empty(self.public_id.as_ref()), quoted_uri) {
            (Some(public_id), uri) => {
                parts.push("PUBLIC".to_string());
                parts.push(format!("\"{}\"", public_id));
                parts.extend(uri);
            }
            (None, Some(uri)) => {
                parts.push("SYSTEM".to_string());
                parts.push(uri);
            }
            (None, None) => {}
        }
        if let Some(subset) = non_empty(self.internal_subset.as_ref()) {
            parts.push(format!("[ {} ]", subset));
        }

        write!(f, "<!DOCTYPE {}>", parts.join(" "))
    }
}

// Empty parts are treated as absent
fn non_empty(part: Option<&String>) -> Option<&str> {
    part.map(String::as_str).filter(|s| !s.is_empty())
}

/// Formats a DOCTYPE declaration. The root defaults to `XML`.
///
/// # Examples
///
/// ```
/// use xmlrender::doctype;
///
/// assert_eq!(doctype(Some("html"), None, None, None), "<!DOCTYPE html>");
/// assert_eq!(
///     doctype(Some("note"), None, Some("note.dtd"), None),
///     r#"<!DOCTYPE note SYSTEM "note.dtd">"#
/// );
/// ```
#[must_use]
pub fn doctype(
    root: Option<&str>,
    public_id: Option<&str>,
    system_uri: Option<&str>,
    internal_subset: Option<&str>,
) -> String {
    Doctype {
        root: root.unwrap_or(DEFAULT_DOCTYPE_ROOT).to_string(),
        public_id: public_id.map(str::to_string),
        system_uri: system_uri.map(str::to_string),
        internal_subset: internal_subset.map(str::to_string),
    }
    .to_string()
}

/// Percent-escapes a system identifier.
///
/// # Examples
///
/// ```
/// use xmlrender::declaration::escape_system_uri;
///
/// assert_eq!(escape_system_uri("my file{1}.dtd"), "my%20file%7B1%7D.dtd");
/// ```
pub fn escape_system_uri(uri: &str) -> String {
    utf8_percent_encode(uri, SYSTEM_URI_ENCODE_SET).to_string()
}

fn quote_system_uri(uri: &str) -> String {
    format!("\"{}\"", escape_system_uri(uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_escape_set() {
        assert_eq!(escape_system_uri("a b"), "a%20b");
        assert_eq!(escape_system_uri("<\"|\\^`>"), "%3C%22%7C%5C%5E%60%3E");
        assert_eq!(escape_system_uri("tab\there"), "tab%09here");
        assert_eq!(escape_system_uri("\u{7f}"), "%7F");
        assert_eq!(escape_system_uri("\u{e9}"), "%C3%A9");
    }

    #[test]
    fn test_uri_safe_characters_pass_through() {
        let uri = "http://example.com/dtd/a-b_c.dtd?x=1&y=2#frag";
        assert_eq!(escape_system_uri(uri), uri);
    }

    #[test]
    fn test_default_doctype_root() {
        assert_eq!(Doctype::default().to_string(), "<!DOCTYPE XML>");
        assert_eq!(doctype(None, None, None, None), "<!DOCTYPE XML>");
    }

    #[test]
    fn test_empty_parts_are_absent() {
        assert_eq!(Doctype::new("").to_string(), "<!DOCTYPE XML>");
        assert_eq!(doctype(Some(""), None, None, None), "<!DOCTYPE XML>");
        assert_eq!(
            doctype(Some("note"), Some(""), Some("note.dtd"), Some("")),
            r#"<!DOCTYPE note SYSTEM "note.dtd">"#
        );
        assert_eq!(doctype(Some("note"), None, Some(""), None), "<!DOCTYPE note>");
    }

    #[test]
    fn test_public_id_without_system_uri() {
        assert_eq!(
            doctype(Some("html"), Some("-//W3C//DTD HTML 4.01//EN"), None, None),
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN">"#
        );
    }
}
