//! Application layer: services and use cases
//!
//! This layer turns host-style input (raw lines, option maps) into domain calls.

pub mod error;
pub mod error_ext;
pub mod options;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use options::{parse_attribute, parse_attributes, TreeOptions};
