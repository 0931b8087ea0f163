//! Tree rendering service
//!
//! Runs the whole pipeline for one block: marker extraction, depth checks,
//! symbol resolution and rendering.

use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, TreeOptions};
use crate::config::Settings;
use crate::domain::{
    check_depths, extract_depth, lanes_from_depths, render_matrix, validate_marker, DepthPolicy,
    DomainError, Line, SymbolRegistry, SymbolSet, DEFAULT_MARKER,
};

/// Output of one render call, ready for the host to wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Rendered tree lines
    pub lines: Vec<String>,
    /// Attributes the renderer did not consume
    pub attributes: BTreeMap<String, String>,
}

impl RenderedBlock {
    /// Plain text, one rendered line per line.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// AsciiDoc listing block carrying the unconsumed attributes.
    pub fn to_listing(&self) -> String {
        let header = std::iter::once("listing".to_string())
            .chain(
                self.attributes
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, v.replace('"', "\\\""))),
            )
            .join(",");
        let mut out = format!("[{}]\n----\n", header);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("----");
        out
    }
}

/// Service for rendering marker-prefixed blocks as trees.
#[derive(Debug, Clone)]
pub struct TreeService {
    registry: SymbolRegistry,
    marker: char,
    policy: DepthPolicy,
    skip_blank_lines: bool,
}

impl Default for TreeService {
    fn default() -> Self {
        Self::new(SymbolRegistry::builtin())
    }
}

impl TreeService {
    /// Create a service with default marker and lenient depth handling.
    pub fn new(registry: SymbolRegistry) -> Self {
        Self {
            registry,
            marker: DEFAULT_MARKER,
            policy: DepthPolicy::Lenient,
            skip_blank_lines: false,
        }
    }

    /// Create a service from loaded settings, including configured symbol sets.
    pub fn from_settings(settings: &Settings) -> ApplicationResult<Self> {
        let service = Self::new(settings.symbol_registry()?)
            .with_marker(settings.marker)?
            .with_policy(DepthPolicy::from_strict(settings.strict_depth))
            .with_skip_blank_lines(settings.skip_blank_lines);
        Ok(service)
    }

    pub fn with_marker(mut self, marker: char) -> ApplicationResult<Self> {
        self.marker = validate_marker(marker)?;
        Ok(self)
    }

    pub fn with_policy(mut self, policy: DepthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn policy(&self) -> DepthPolicy {
        self.policy
    }

    /// Extract depth and text from every raw line.
    ///
    /// Returns each parsed line with its 1-based source line number.
    pub fn parse_lines<S: AsRef<str>>(&self, raw: &[S]) -> ApplicationResult<Vec<(usize, Line)>> {
        raw.iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_ref()))
            .filter(|(_, line)| !(self.skip_blank_lines && line.trim().is_empty()))
            .map(|(number, line)| {
                extract_depth(line, self.marker)
                    .map(|parsed| (number, parsed))
                    .map_err(|e| ApplicationError::at_line(number, e))
            })
            .collect()
    }

    /// Resolve the symbol set selected by `options`.
    pub fn symbols(&self, options: &TreeOptions) -> ApplicationResult<SymbolSet> {
        Ok(self.registry.resolve(&options.symbols, &options.overrides)?)
    }

    /// Render one block of raw lines.
    #[instrument(level = "debug", skip_all, fields(lines = raw.len(), symbols = %options.symbols))]
    pub fn render_block<S: AsRef<str>>(
        &self,
        raw: &[S],
        options: &TreeOptions,
    ) -> ApplicationResult<RenderedBlock> {
        let parsed = self.parse_lines(raw)?;
        debug!("render_block: parsed {} lines", parsed.len());

        let depths: Vec<usize> = parsed.iter().map(|(_, l)| l.nesting).collect();
        check_depths(&depths, self.policy).map_err(|e| match e {
            DomainError::DepthJump { index, .. } => ApplicationError::at_line(parsed[index].0, e),
            other => ApplicationError::Domain(other),
        })?;

        let symbols = self.symbols(options)?;
        let lanes = lanes_from_depths(&depths);
        let lines = render_matrix(&lanes, parsed.iter().map(|(_, l)| l.text.as_str()), &symbols);

        Ok(RenderedBlock {
            lines,
            attributes: options.passthrough_attributes.clone(),
        })
    }
}
