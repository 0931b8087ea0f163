//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: DomainError,
    },

    #[error("invalid option '{key}': {message}")]
    InvalidOption { key: String, message: String },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Attach a 1-based line number to a domain error.
    pub fn at_line(line: usize, source: DomainError) -> Self {
        Self::Line { line, source }
    }

    /// The underlying domain error, if any.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            ApplicationError::Domain(e) | ApplicationError::Line { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
