//! Render depth-marked lines as a directory-style tree.
//!
//! ```
//! use monotree::domain::{extract_depth, render, resolve_symbol_set, SymbolOverrides};
//!
//! let lines = ["> A", ">> B", ">>> C", ">> D"]
//!     .iter()
//!     .map(|l| extract_depth(l, '>'))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let symbols = resolve_symbol_set("fancy", &SymbolOverrides::new())?;
//!
//! assert_eq!(render(&lines, &symbols), ["A", "├── B", "│   └── C", "└── D"]);
//! # Ok::<_, monotree::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
