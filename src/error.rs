//! Error handling types for loading and writing markup
//!
//! Rendering itself never fails: every node shape has a defined output. The
//! types here cover the fallible edges around it, namely reading node trees
//! from JSON, enforcing input limits and file IO.

use std::{error::Error, fmt};
use thiserror::Error;

/// Main error type for fallible operations
#[derive(Debug)]
pub struct RenderError {
    /// The specific kind of error
    kind: RenderErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderErrorKind {
    IO(IOError),
    Input(InputError),
    Security(SecurityError),
}

/// Errors in the shape of a JSON node document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// The document root is not a sequence of nodes
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// A value in node position cannot be turned into a node
    #[error("Invalid node at {path}: {found}")]
    InvalidNode { path: String, found: String },
    /// An attribute value is not a scalar
    #[error("Invalid value for attribute '{name}' at {path}")]
    InvalidAttributeValue { path: String, name: String },
}

/// Limits guarding the loader against hostile input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityError {
    /// Exceeded maximum depth of nesting
    #[error("Maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),
    /// Exceeded maximum input size
    #[error("Maximum input size of {0} bytes exceeded")]
    MaxSizeExceeded(usize),
}

/// IO operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
}

impl RenderError {
    pub fn new(kind: RenderErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &RenderErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<IOError> for RenderError {
    fn from(err: IOError) -> Self {
        Self::new(RenderErrorKind::IO(err))
    }
}

impl From<InputError> for RenderError {
    fn from(err: InputError) -> Self {
        Self::new(RenderErrorKind::Input(err))
    }
}

impl From<SecurityError> for RenderError {
    fn from(err: SecurityError) -> Self {
        Self::new(RenderErrorKind::Security(err))
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        let location = format!("line {}, column {}", err.line(), err.column());
        Self::new(RenderErrorKind::Input(InputError::InvalidJson(location))).with_source(err)
    }
}

impl fmt::Display for RenderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO(err) => write!(f, "{}", err),
            Self::Input(err) => write!(f, "{}", err),
            Self::Security(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.kind)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(&**source),
            None => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
