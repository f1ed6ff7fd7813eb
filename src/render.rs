//! Markup renderer.
//!
//! Turns a sequence of [`Node`]s into a flat markup string. Rendering is
//! total: every node shape has a defined output and nothing here fails.
//!
//! - Text is entity-encoded (`&` and `<`).
//! - An element with a [`Tag::Name`] becomes a start tag, its rendered
//!   content and an end tag, or a self-closing tag when it has no content.
//! - A [`Tag::Transparent`] element contributes only its content.
//! - A [`Tag::Literal`] element contributes its raw markup unchanged.
//! - A [`Node::Group`] contributes its members in order.

use crate::escape::{write_escaped_attribute, write_escaped_text};
use crate::node::{Attributes, Element, Node, Tag};

/// Renders a sequence of nodes into a markup string.
///
/// # Examples
///
/// ```
/// use xmlrender::{render, Element, Node};
///
/// let nodes = vec![
///     Node::text("Fish & Chips: "),
///     Element::new("b").child("£5").into(),
/// ];
/// assert_eq!(render(&nodes), "Fish &amp; Chips: <b>£5</b>");
/// ```
#[must_use]
pub fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    render_into(&mut out, nodes);
    out
}

/// Appends the rendering of `nodes` to `out`.
pub fn render_into(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        write_node(out, node);
    }
}

/// Renders a single element.
///
/// # Examples
///
/// ```
/// use xmlrender::{render_element, Element};
///
/// assert_eq!(render_element(&Element::new("br")), "<br/>");
/// assert_eq!(render_element(&Element::transparent().child("bare")), "bare");
/// ```
#[must_use]
pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

/// Renders an attribute map as ` name="value"` pairs.
///
/// The result is empty when there are no attributes, or begins with a space,
/// so it can be spliced directly after a tag name. Absent values are skipped.
///
/// # Examples
///
/// ```
/// use xmlrender::{attrs, render_attributes};
///
/// assert_eq!(render_attributes(None), "");
/// assert_eq!(render_attributes(Some(&attrs! { "id" => "x\"y" })), r#" id="x&quot;y""#);
/// ```
#[must_use]
pub fn render_attributes(attributes: Option<&Attributes>) -> String {
    let mut out = String::new();
    write_attributes(&mut out, attributes);
    out
}

/// Renders only the opening tag of an element, never self-closing.
///
/// Content and the matching [`end_tag`] are left to the caller. A transparent
/// element has no start tag; a literal element yields its raw markup.
///
/// # Examples
///
/// ```
/// use xmlrender::{end_tag, start_tag, Element};
///
/// let list = Element::new("ul").attr("class", "items");
/// let mut out = start_tag(&list);
/// out.push_str("<li>one</li>");
/// out.push_str(&end_tag("ul"));
/// assert_eq!(out, r#"<ul class="items"><li>one</li></ul>"#);
/// ```
#[must_use]
pub fn start_tag(element: &Element) -> String {
    let mut out = String::new();
    match &element.tag {
        Tag::Name(name) => {
            write_open_tag(&mut out, name, element.attributes.as_ref());
            out.push('>');
        }
        Tag::Literal(markup) => out.push_str(markup),
        Tag::Transparent => {}
    }
    out
}

/// Renders a closing tag for `name`.
#[must_use]
pub fn end_tag(name: &str) -> String {
    format!("</{}>", name)
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => write_escaped_text(out, text),
        Node::Element(element) => write_element(out, element),
        Node::Group(nodes) => render_into(out, nodes),
    }
}

fn write_element(out: &mut String, element: &Element) {
    match &element.tag {
        Tag::Literal(markup) => out.push_str(markup),
        Tag::Transparent => render_into(out, &element.content),
        Tag::Name(name) => {
            write_open_tag(out, name, element.attributes.as_ref());
            if element.content.is_empty() {
                out.push_str("/>");
            } else {
                out.push('>');
                render_into(out, &element.content);
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
        }
    }
}

fn write_open_tag(out: &mut String, name: &str, attributes: Option<&Attributes>) {
    out.push('<');
    out.push_str(name);
    write_attributes(out, attributes);
}

fn write_attributes(out: &mut String, attributes: Option<&Attributes>) {
    let Some(attributes) = attributes else {
        return;
    };

    for (name, value) in attributes {
        if let Some(value) = value {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            write_escaped_attribute(out, value);
            out.push('"');
        }
    }
}
