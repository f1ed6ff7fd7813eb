//! Node model describing markup to be rendered.
//!
//! A document is a sequence of [`Node`]s. Nodes are built by the caller,
//! consumed by [`render`](crate::render::render) and then discarded; nothing
//! is retained between calls.

use indexmap::IndexMap;
use std::fmt;

/// Attribute map of an element.
///
/// A `None` value marks an absent attribute, which is skipped on output.
/// Every `Some` value is rendered, including `"0"` and `""`.
pub type Attributes = IndexMap<String, Option<String>>;

/// A single piece of markup content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text content, entity-encoded on output
    Text(String),
    /// An element descriptor
    Element(Element),
    /// A sequence of nodes rendered in order with no wrapper
    Group(Vec<Node>),
}

/// How an element's tag slot is interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// A normal tag name
    Name(String),
    /// No tag: the element's content is emitted without wrapping tags
    Transparent,
    /// Pre-encoded markup emitted verbatim; attributes and content are ignored
    Literal(String),
}

/// An element descriptor: tag, optional attributes, content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attributes: Option<Attributes>,
    pub content: Vec<Node>,
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a node whose markup is emitted without any encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrender::{render, Node};
    ///
    /// assert_eq!(render(&[Node::raw("&nbsp;<br>")]), "&nbsp;<br>");
    /// ```
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Element(Element::literal(markup))
    }

    /// An empty group, which renders nothing.
    pub fn empty() -> Self {
        Self::Group(Vec::new())
    }
}

impl Tag {
    /// Returns the tag name for a normal element.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Transparent | Self::Literal(_) => None,
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        if name.is_empty() {
            Self::Transparent
        } else {
            Self::Name(name)
        }
    }
}

impl<T: Into<Self>> From<Option<T>> for Tag {
    fn from(name: Option<T>) -> Self {
        name.map_or(Self::Transparent, Into::into)
    }
}

impl Element {
    /// Creates an element with no attributes and no content.
    ///
    /// An empty name produces a transparent element.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrender::Element;
    ///
    /// let link = Element::new("a").attr("href", "/home").child("Home");
    /// assert_eq!(link.to_string(), r#"<a href="/home">Home</a>"#);
    /// ```
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            attributes: None,
            content: Vec::new(),
        }
    }

    /// Creates an element that contributes only its content.
    pub fn transparent() -> Self {
        Self::new(Tag::Transparent)
    }

    /// Creates a literal element carrying pre-encoded markup.
    pub fn literal(markup: impl Into<String>) -> Self {
        Self::new(Tag::Literal(markup.into()))
    }

    /// Sets an attribute to a present value.
    #[must_use]
    pub fn attr(self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attr_opt(name, Some(value))
    }

    /// Sets an attribute that may be absent; `None` is skipped on output.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmlrender::Element;
    ///
    /// let title: Option<&str> = None;
    /// let input = Element::new("input").attr("tabindex", 0).attr_opt("title", title);
    /// assert_eq!(input.to_string(), r#"<input tabindex="0"/>"#);
    /// ```
    #[must_use]
    pub fn attr_opt(mut self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.into(), value.map(|v| v.to_string()));
        self
    }

    /// Merges a whole attribute map into the element.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        match &mut self.attributes {
            Some(existing) => existing.extend(attributes),
            None => self.attributes = Some(attributes),
        }
        self
    }

    /// Appends one content node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.content.push(node.into());
        self
    }

    /// Appends every node produced by `nodes`.
    #[must_use]
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.content.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Looks up an attribute value; absent attributes yield `None`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(name))
            .and_then(Option::as_deref)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Vec<Self>> for Node {
    fn from(nodes: Vec<Self>) -> Self {
        Self::Group(nodes)
    }
}

impl<T: Into<Self>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        node.map_or_else(Self::empty, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Node {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Group(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(std::slice::from_ref(self)))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_element(self))
    }
}
