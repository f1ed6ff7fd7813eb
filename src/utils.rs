use crate::{
    error::{IOError, RenderError, Result},
    loader::{JsonLoader, LoaderConfig},
    node::Node,
    render::render,
};
use std::{fs, io};

fn io_error(path: &str, err: io::Error, fallback: fn(String) -> IOError) -> RenderError {
    let kind = match err.kind() {
        io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()),
        io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
        _ => fallback(err.to_string()),
    };
    RenderError::from(kind).with_source(err)
}

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error(path, e, IOError::ReadError))
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| io_error(path, e, IOError::WriteError))
}

pub fn load_json(content: &str) -> Result<Vec<Node>> {
    load_json_with_config(content, LoaderConfig::default())
}

pub fn load_json_with_config(content: &str, config: LoaderConfig) -> Result<Vec<Node>> {
    JsonLoader::new(config).load_str(content)
}

pub fn render_json(content: &str) -> Result<String> {
    load_json(content).map(|nodes| render(&nodes))
}
