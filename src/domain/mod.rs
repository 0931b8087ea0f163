//! Domain layer: entities and tree layout logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod depth;
pub mod entities;
pub mod error;
pub mod lanes;
pub mod render;
pub mod symbols;

pub use depth::{extract_depth, validate_marker, DEFAULT_MARKER};
pub use entities::*;
pub use error::{DomainError, DomainResult, MalformedReason};
pub use lanes::{check_depths, compute_lanes, lanes_from_depths, DepthPolicy};
pub use render::{render, render_matrix};
pub use symbols::{resolve_symbol_set, SymbolRegistry, SYMBOL_SET_FANCY, SYMBOL_SET_SIMPLE};
