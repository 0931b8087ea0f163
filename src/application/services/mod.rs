//! Application services

pub mod tree;

pub use tree::{RenderedBlock, TreeService};
