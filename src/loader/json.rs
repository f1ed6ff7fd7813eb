//! JSON loader.
//!
//! Converts a `serde_json::Value` in array notation into typed [`Node`]s.
//! This is the one place where the attribute slot is shape-sniffed: the
//! typed model never needs it.
//!
//! Shape rules, for a value in node position:
//! - string: text; number: its decimal text
//! - `null` or `false`: nothing (an empty group)
//! - array whose first item is a string, `null`, `false` or `0`: an
//!   element. `""`, `null`, `false` and `0` make it transparent; the string
//!   `"0"` is an ordinary tag name.
//! - array whose first item is an array holding exactly one string: a
//!   literal, emitted verbatim; the remaining items are ignored
//! - any other array, including `[]`: a group of its items
//! - `true` or an object: an error
//!
//! Inside an element, a second item that is an object is the attribute map;
//! anything else is the first content item.

use super::config::{LoaderConfig, LoadingContext};
use crate::error::{InputError, RenderError, Result};
use crate::node::{Attributes, Element, Node, Tag};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Loads node sequences from JSON values
#[derive(Debug, Default)]
pub struct JsonLoader {
    config: LoaderConfig,
    context: LoadingContext,
}

impl JsonLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            context: LoadingContext::new(),
        }
    }

    /// Parses JSON source text and loads the node sequence it describes.
    #[instrument(skip_all, fields(len = input.len()))]
    pub fn load_str(&mut self, input: &str) -> Result<Vec<Node>> {
        self.config.validate_size(input.len())?;
        let document: Value = serde_json::from_str(input)?;
        self.load(&document)
    }

    /// Loads the node sequence described by a JSON document.
    ///
    /// The document root must be an array; each item is one top-level node.
    pub fn load(&mut self, document: &Value) -> Result<Vec<Node>> {
        let Value::Array(items) = document else {
            return Err(InputError::InvalidDocument(format!(
                "expected an array of nodes, found {}",
                describe(document)
            ))
            .into());
        };

        let nodes = items
            .iter()
            .enumerate()
            .map(|(index, item)| self.load_node(item, &format!("$[{}]", index)))
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} top-level nodes", nodes.len());
        Ok(nodes)
    }

    fn load_node(&mut self, value: &Value, path: &str) -> Result<Node> {
        match value {
            Value::String(text) => Ok(Node::Text(text.clone())),
            Value::Number(number) => Ok(Node::Text(number.to_string())),
            Value::Null | Value::Bool(false) => Ok(Node::empty()),
            Value::Array(items) => {
                self.context.enter_nested(&self.config)?;
                let node = self.load_array(items, path);
                self.context.exit_nested();
                node
            }
            Value::Bool(true) | Value::Object(_) => Err(InputError::InvalidNode {
                path: path.to_string(),
                found: describe(value).to_string(),
            }
            .into()),
        }
    }

    fn load_array(&mut self, items: &[Value], path: &str) -> Result<Node> {
        let Some((first, rest)) = items.split_first() else {
            return Ok(Node::empty());
        };

        match tag_slot(first) {
            Some(Tag::Literal(markup)) => Ok(Node::raw(markup)),
            Some(tag) => self.load_element(tag, rest, path).map(Node::Element),
            None => self.load_items(items, 0, path).map(Node::Group),
        }
    }

    fn load_element(&mut self, tag: Tag, rest: &[Value], path: &str) -> Result<Element> {
        let (attributes, content, offset) = match rest.split_first() {
            Some((Value::Object(map), content)) => {
                (Some(load_attributes(map, path)?), content, 2)
            }
            _ => (None, rest, 1),
        };

        Ok(Element {
            tag,
            attributes,
            content: self.load_items(content, offset, path)?,
        })
    }

    fn load_items(&mut self, items: &[Value], offset: usize, path: &str) -> Result<Vec<Node>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.load_node(item, &format!("{}[{}]", path, index + offset)))
            .collect()
    }
}

/// Loads nodes from a JSON document with the default limits.
///
/// # Examples
///
/// ```
/// use xmlrender::{loader::load_nodes, render};
///
/// let doc = serde_json::json!([["p", {"class": "note"}, "a < b"]]);
/// let nodes = load_nodes(&doc).unwrap();
/// assert_eq!(render(&nodes), r#"<p class="note">a &lt; b</p>"#);
/// ```
pub fn load_nodes(document: &Value) -> Result<Vec<Node>> {
    JsonLoader::default().load(document)
}

fn tag_slot(value: &Value) -> Option<Tag> {
    match value {
        Value::String(name) => Some(Tag::from(name.as_str())),
        Value::Null | Value::Bool(false) => Some(Tag::Transparent),
        Value::Number(n) if n.as_f64() == Some(0.0) => Some(Tag::Transparent),
        Value::Array(marker) => match marker.as_slice() {
            [Value::String(markup)] => Some(Tag::Literal(markup.clone())),
            _ => None,
        },
        _ => None,
    }
}

fn load_attributes(map: &Map<String, Value>, path: &str) -> Result<Attributes> {
    map.iter()
        .map(|(name, value)| {
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(RenderError::from(InputError::InvalidAttributeValue {
                        path: path.to_string(),
                        name: name.clone(),
                    }))
                }
            };
            Ok((name.clone(), value))
        })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
