//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Why a raw line could not be split into depth and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line has no characters at all.
    Empty,
    /// The line does not start with the depth marker.
    MissingMarker,
    /// The marker run is not followed by a separator character.
    MissingSeparator,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            MalformedReason::Empty => "line is empty",
            MalformedReason::MissingMarker => "line does not start with a depth marker",
            MalformedReason::MissingSeparator => "depth marker is not followed by a separator",
        };
        f.write_str(msg)
    }
}

/// Domain errors represent structural violations of the input.
/// These are independent of I/O and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed line: {reason}")]
    MalformedLine { reason: MalformedReason },

    #[error("invalid depth {depth} at index {index}")]
    InvalidDepth { index: usize, depth: i64 },

    #[error("depth jumps from {from} to {to}")]
    DepthJump { index: usize, from: usize, to: usize },

    #[error("unknown symbol set '{name}' (known: {known})")]
    UnknownSymbolSet { name: String, known: String },

    #[error("invalid depth marker {marker:?}")]
    InvalidMarker { marker: char },
}

impl DomainError {
    pub(crate) fn malformed(reason: MalformedReason) -> Self {
        Self::MalformedLine { reason }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
