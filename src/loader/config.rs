use crate::error::{Result, SecurityError};

/// Maximum node nesting depth, kept below serde_json's own recursion limit
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Maximum JSON source size (10MB)
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for loader limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum nesting depth of elements and groups
    pub max_depth: usize,
    /// Maximum JSON source size in bytes
    pub max_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn validate_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(SecurityError::MaxSizeExceeded(self.max_size).into());
        }
        Ok(())
    }
}

/// Tracks nesting depth while loading
#[derive(Debug, Default)]
pub struct LoadingContext {
    current_depth: usize,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_nested(&mut self, config: &LoaderConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(SecurityError::MaxDepthExceeded(config.max_depth).into());
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}
