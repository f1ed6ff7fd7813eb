//! Loading node trees from JSON.
//!
//! The JSON form mirrors the untyped array notation for markup:
//! `["tag", {"attr": "value"}, ...content]`. See [`json::JsonLoader`] for the
//! exact shape rules.

pub mod config;
pub mod json;

pub use config::{LoaderConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE};
pub use json::{load_nodes, JsonLoader};
