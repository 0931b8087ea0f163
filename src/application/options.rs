//! Render options read from a host-style attribute map.
//!
//! Recognised keys:
//! - `symbols`: base symbol set name
//! - `symbol_empty` / `e`, `symbol_passthrough` / `p`,
//!   `symbol_junction` / `j`, `symbol_terminal` / `t`: glyph overrides
//!
//! A short alias wins over its long key when both are given.
//! Any other key is kept untouched for the host's output block.

use std::collections::BTreeMap;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{LaneState, SymbolOverrides};

pub const OPT_SYMBOLS: &str = "symbols";

/// (state, long key, short alias)
const SYMBOL_KEYS: [(LaneState, &str, &str); 4] = [
    (LaneState::Empty, "symbol_empty", "e"),
    (LaneState::Passthrough, "symbol_passthrough", "p"),
    (LaneState::Junction, "symbol_junction", "j"),
    (LaneState::Terminal, "symbol_terminal", "t"),
];

/// Options for one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    /// Base symbol set name
    pub symbols: String,
    /// Per-state glyph replacements
    pub overrides: SymbolOverrides,
    /// Attributes not recognised as tree options
    pub passthrough_attributes: BTreeMap<String, String>,
}

impl TreeOptions {
    /// Options with a base set and nothing else.
    pub fn new(symbols: impl Into<String>) -> Self {
        Self {
            symbols: symbols.into(),
            overrides: SymbolOverrides::new(),
            passthrough_attributes: BTreeMap::new(),
        }
    }

    /// Read options from an attribute map; `default_set` applies when `symbols` is absent.
    pub fn from_attributes(attributes: &BTreeMap<String, String>, default_set: &str) -> Self {
        let symbols = attributes
            .get(OPT_SYMBOLS)
            .cloned()
            .unwrap_or_else(|| default_set.to_string());

        let mut overrides = SymbolOverrides::new();
        for (state, long, _) in SYMBOL_KEYS {
            if let Some(glyph) = attributes.get(long) {
                overrides.set(state, glyph.as_str());
            }
        }
        for (state, _, short) in SYMBOL_KEYS {
            if let Some(glyph) = attributes.get(short) {
                overrides.set(state, glyph.as_str());
            }
        }

        let passthrough_attributes = attributes
            .iter()
            .filter(|(key, _)| !is_tree_option(key))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            symbols,
            overrides,
            passthrough_attributes,
        }
    }

    /// Replace the base set name.
    pub fn with_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = symbols.into();
        self
    }

    /// Layer further overrides on top of the current ones.
    pub fn with_overrides(mut self, overrides: &SymbolOverrides) -> Self {
        self.overrides = self.overrides.merged(overrides);
        self
    }
}

/// Whether `key` is consumed by the tree renderer.
pub fn is_tree_option(key: &str) -> bool {
    key == OPT_SYMBOLS
        || SYMBOL_KEYS
            .iter()
            .any(|(_, long, short)| key == *long || key == *short)
}

/// Parse a `KEY=VALUE` pair. The value may be empty or contain `=`.
pub fn parse_attribute(raw: &str) -> ApplicationResult<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ApplicationError::InvalidOption {
            key: raw.to_string(),
            message: "expected KEY=VALUE".to_string(),
        })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ApplicationError::InvalidOption {
            key: raw.to_string(),
            message: "empty key".to_string(),
        });
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse many `KEY=VALUE` pairs into a map; later pairs win.
pub fn parse_attributes<S: AsRef<str>>(raw: &[S]) -> ApplicationResult<BTreeMap<String, String>> {
    raw.iter().map(|s| parse_attribute(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn given_no_attributes_when_reading_options_then_uses_default_set() {
        let options = TreeOptions::from_attributes(&BTreeMap::new(), "fancy");
        assert_eq!(options, TreeOptions::new("fancy"));
    }

    #[test]
    fn given_long_and_short_keys_when_reading_options_then_short_alias_wins() {
        let options = TreeOptions::from_attributes(
            &attrs(&[
                ("symbols", "simple"),
                ("symbol_terminal", "L"),
                ("t", "T"),
                ("symbol_junction", "J"),
            ]),
            "fancy",
        );

        assert_eq!(options.symbols, "simple");
        assert_eq!(options.overrides.get(LaneState::Terminal), Some("T"));
        assert_eq!(options.overrides.get(LaneState::Junction), Some("J"));
        assert_eq!(options.overrides.get(LaneState::Empty), None);
    }

    #[test]
    fn given_unrelated_attributes_when_reading_options_then_they_pass_through() {
        let input = attrs(&[("title", "Layout"), ("p", "!   "), ("subs", "none")]);

        let options = TreeOptions::from_attributes(&input, "fancy");

        assert_eq!(
            options.passthrough_attributes,
            attrs(&[("title", "Layout"), ("subs", "none")])
        );
        assert_eq!(input.len(), 3, "input map must not be consumed");
    }

    #[test]
    fn given_pair_with_equals_in_value_when_parsing_then_splits_on_first() {
        assert_eq!(
            parse_attribute("title=a=b").unwrap(),
            ("title".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_attribute("t=").unwrap(),
            ("t".to_string(), String::new())
        );
    }

    #[test]
    fn given_pair_without_equals_when_parsing_then_fails() {
        assert!(matches!(
            parse_attribute("symbols"),
            Err(ApplicationError::InvalidOption { .. })
        ));
        assert!(matches!(
            parse_attribute("=x"),
            Err(ApplicationError::InvalidOption { .. })
        ));
    }

    #[test]
    fn given_options_when_layering_flags_then_flags_win() {
        let options = TreeOptions::from_attributes(&attrs(&[("e", "..  ")]), "fancy")
            .with_symbols("simple")
            .with_overrides(&SymbolOverrides::new().with(LaneState::Empty, "    "));

        assert_eq!(options.symbols, "simple");
        assert_eq!(options.overrides.get(LaneState::Empty), Some("    "));
    }
}
