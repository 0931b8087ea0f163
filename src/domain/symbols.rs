//! Named symbol sets and their resolution.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::{SymbolOverrides, SymbolSet};

pub const SYMBOL_SET_FANCY: &str = "fancy";
pub const SYMBOL_SET_SIMPLE: &str = "simple";

/// Box-drawing glyphs.
pub fn fancy() -> SymbolSet {
    SymbolSet::new("    ", "│   ", "├── ", "└── ")
}

/// Plain ASCII glyphs.
pub fn simple() -> SymbolSet {
    SymbolSet::new("    ", "|   ", "+-- ", "`-- ")
}

/// Look up a built-in set by name.
pub fn builtin(name: &str) -> Option<SymbolSet> {
    match name {
        SYMBOL_SET_FANCY => Some(fancy()),
        SYMBOL_SET_SIMPLE => Some(simple()),
        _ => None,
    }
}

pub fn is_builtin(name: &str) -> bool {
    builtin(name).is_some()
}

/// Resolve a built-in base set and apply overrides.
///
/// # Errors
/// `UnknownSymbolSet` if `base_name` is not a built-in set.
pub fn resolve_symbol_set(base_name: &str, overrides: &SymbolOverrides) -> DomainResult<SymbolSet> {
    SymbolRegistry::builtin().resolve(base_name, overrides)
}

/// Symbol sets available to a render call: built-ins plus configured ones.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    sets: BTreeMap<String, SymbolSet>,
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SymbolRegistry {
    /// Registry holding only the built-in sets.
    pub fn builtin() -> Self {
        let sets = [
            (SYMBOL_SET_FANCY.to_string(), fancy()),
            (SYMBOL_SET_SIMPLE.to_string(), simple()),
        ]
        .into_iter()
        .collect();
        Self { sets }
    }

    /// Add or replace a named set.
    pub fn with_set(mut self, name: impl Into<String>, set: SymbolSet) -> Self {
        self.sets.insert(name.into(), set);
        self
    }

    pub fn get(&self, name: &str) -> Option<&SymbolSet> {
        self.sets.get(name)
    }

    /// Set names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Pick a base set by name and apply overrides on a copy of it.
    pub fn resolve(&self, base_name: &str, overrides: &SymbolOverrides) -> DomainResult<SymbolSet> {
        let base = self
            .get(base_name)
            .ok_or_else(|| DomainError::UnknownSymbolSet {
                name: base_name.to_string(),
                known: self.names().join(", "),
            })?;
        Ok(base.with_overrides(overrides))
    }
}
