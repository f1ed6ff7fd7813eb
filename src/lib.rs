//! xmlrender: render nested element descriptors into XML/HTML strings
//!
//! This crate provides functionality to:
//! - Build markup as a typed tree of nodes and render it to a string
//! - Encode text and attribute values at the right boundaries
//! - Emit XML declarations, DOCTYPE declarations and standalone start/end tags
//! - Load node trees from their JSON array notation
//!
//! # Examples
//! ```
//! use xmlrender::{render, Element, Node};
//!
//! let items = ["one", "two & three"];
//! let list = Element::new("ul")
//!     .attr("class", "items")
//!     .children(items.iter().map(|item| Element::new("li").child(*item)));
//!
//! assert_eq!(
//!     render(&[Node::from(list)]),
//!     r#"<ul class="items"><li>one</li><li>two &amp; three</li></ul>"#
//! );
//! ```

use tracing::{debug, info, instrument, warn};

#[macro_use]
mod macros;

pub mod declaration;
pub mod error;
pub mod escape;
pub mod loader;
pub mod node;
pub mod render;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use declaration::{doctype, xml_declaration, Doctype, XmlDeclaration};
pub use error::{IOError, InputError, RenderError, RenderErrorKind, Result, SecurityError};
pub use node::{Attributes, Element, Node, Tag};
pub use render::{end_tag, render, render_attributes, render_element, render_into, start_tag};

/// Reads a JSON node document from `path` and renders it.
#[instrument]
pub fn render_file(path: &str) -> Result<String> {
    debug!("Starting to render file: {}", path);

    let content = utils::read_file(path)?;

    if !path.ends_with(".json") {
        warn!("Input does not have a .json extension, reading it as JSON anyway");
    }

    let nodes = utils::load_json(&content).map_err(|e| e.with_context(format!("in {}", path)))?;
    info!("Loaded {} nodes, rendering", nodes.len());

    let output = render(&nodes);
    debug!("Rendering completed");
    Ok(output)
}
