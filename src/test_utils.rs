//! Shared helpers for the integration tests

use std::{env, fs, path::PathBuf};

// Re-export common test types/traits
pub use crate::{
    declaration::{doctype, xml_declaration, Doctype, XmlDeclaration},
    error::{IOError, InputError, RenderError, RenderErrorKind, SecurityError},
    loader::{load_nodes, JsonLoader, LoaderConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE},
    node::{Attributes, Element, Node, Tag},
    render::{end_tag, render, render_attributes, render_element, start_tag},
    render_file,
    utils::{load_json, read_file, render_json, write_file},
};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("xmlrender_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// Renders a single node.
pub fn render_one(node: impl Into<Node>) -> String {
    render(&[node.into()])
}
