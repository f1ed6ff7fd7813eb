#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use xmlrender::test_utils::*;

#[test]
fn test_default_xml_declaration() {
    assert_eq!(
        xml_declaration(None, None, None),
        r#"<?xml version="1.0" encoding="UTF-8"?>"#
    );
    assert_eq!(
        XmlDeclaration::default().to_string(),
        xml_declaration(None, None, None)
    );
}

#[test]
fn test_xml_declaration_version_and_encoding() {
    assert_eq!(
        xml_declaration(Some("1.2"), Some("CP-1252"), None),
        r#"<?xml version="1.2" encoding="CP-1252"?>"#
    );
}

#[test]
fn test_xml_declaration_standalone() {
    assert_eq!(
        xml_declaration(None, None, Some("no")),
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    );
    assert_eq!(
        XmlDeclaration::default()
            .version("1.1")
            .encoding("ISO-8859-1")
            .standalone("yes")
            .to_string(),
        r#"<?xml version="1.1" encoding="ISO-8859-1" standalone="yes"?>"#
    );
}

#[test]
fn test_doctype_root_only() {
    assert_eq!(doctype(Some("html"), None, None, None), "<!DOCTYPE html>");
}

#[test]
fn test_doctype_public() {
    assert_eq!(
        doctype(
            Some("HTML"),
            Some("-//W3C//DTD HTML 4.01//EN"),
            Some("http://www.w3.org/TR/html4/strict.dtd"),
            None
        ),
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#
    );
}

#[test]
fn test_doctype_system() {
    assert_eq!(
        doctype(
            Some("transaction"),
            None,
            Some("http://example.com/transaction.dtd"),
            None
        ),
        r#"<!DOCTYPE transaction SYSTEM "http://example.com/transaction.dtd">"#
    );
}

#[test]
fn test_doctype_internal_subset() {
    assert_eq!(
        doctype(
            Some("transaction"),
            None,
            None,
            Some("<!ELEMENT description (#PCDATA)>")
        ),
        "<!DOCTYPE transaction [ <!ELEMENT description (#PCDATA)> ]>"
    );
}

#[test]
fn test_doctype_all_parts() {
    let decl = Doctype::new("book")
        .public_id("-//Example//DTD Book//EN")
        .system_uri("book.dtd")
        .internal_subset("<!ENTITY ed \"2nd\">");
    assert_eq!(
        decl.to_string(),
        r#"<!DOCTYPE book PUBLIC "-//Example//DTD Book//EN" "book.dtd" [ <!ENTITY ed "2nd"> ]>"#
    );
}

#[test]
fn test_doctype_system_uri_is_percent_escaped() {
    assert_eq!(
        doctype(Some("doc"), None, Some("dtds/my doc|v2.dtd"), None),
        r#"<!DOCTYPE doc SYSTEM "dtds/my%20doc%7Cv2.dtd">"#
    );
    assert_eq!(
        doctype(Some("doc"), None, Some("r\u{e9}sum\u{e9}.dtd"), None),
        r#"<!DOCTYPE doc SYSTEM "r%C3%A9sum%C3%A9.dtd">"#
    );
}

#[test]
fn test_doctype_default_root() {
    assert_eq!(doctype(None, None, Some("x.dtd"), None), r#"<!DOCTYPE XML SYSTEM "x.dtd">"#);
}

#[test]
fn test_doctype_empty_root_falls_back() {
    assert_eq!(doctype(Some(""), None, None, None), "<!DOCTYPE XML>");
    assert_eq!(
        Doctype::new("").public_id("").system_uri("x.dtd").to_string(),
        r#"<!DOCTYPE XML SYSTEM "x.dtd">"#
    );
}
