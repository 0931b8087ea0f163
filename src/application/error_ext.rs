//! Error conversion helpers for file access in the application layer.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` into a config error with path context.
pub trait IoResultExt<T> {
    /// Turn an I/O failure into `ApplicationError::Config`.
    ///
    /// ```ignore
    /// std::fs::read_to_string(&path).config_context("read", &path)?;
    /// ```
    fn config_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn config_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Config {
            message: format!("{} {}: {}", action, path.display(), e),
        })
    }
}
