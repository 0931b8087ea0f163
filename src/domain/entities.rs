//! Domain entities: core data structures

use std::fmt;
use std::ops::Index;

/// One input entry: its nesting depth and the text left after the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Number of ancestor levels, 0 = root
    pub nesting: usize,
    /// Content after the depth marker and separator
    pub text: String,
}

impl Line {
    pub fn new(nesting: usize, text: impl Into<String>) -> Self {
        Self {
            nesting,
            text: text.into(),
        }
    }
}

/// Glyph drawn in one ancestor column for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneState {
    /// Nothing continues through this column
    Empty,
    /// An ancestor's connector continues downward
    Passthrough,
    /// Branch to this line, more siblings follow
    Junction,
    /// Branch to this line, last sibling at this depth
    Terminal,
}

impl LaneState {
    /// All states in ordinal order.
    pub const ALL: [LaneState; 4] = [
        LaneState::Empty,
        LaneState::Passthrough,
        LaneState::Junction,
        LaneState::Terminal,
    ];

    /// Stable index of this state into a symbol table.
    pub const fn ordinal(self) -> usize {
        match self {
            LaneState::Empty => 0,
            LaneState::Passthrough => 1,
            LaneState::Junction => 2,
            LaneState::Terminal => 3,
        }
    }

    /// Whether this state draws the branch of the line itself.
    pub const fn is_branch(self) -> bool {
        matches!(self, LaneState::Junction | LaneState::Terminal)
    }

    /// Lower-case name, as used in config keys.
    pub const fn name(self) -> &'static str {
        match self {
            LaneState::Empty => "empty",
            LaneState::Passthrough => "passthrough",
            LaneState::Junction => "junction",
            LaneState::Terminal => "terminal",
        }
    }
}

impl fmt::Display for LaneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lane states per line, row `i` has exactly `nesting[i]` entries.
pub type LaneMatrix = Vec<Vec<LaneState>>;

/// Display string for each lane state.
///
/// Fixed four slots indexed by [`LaneState::ordinal`]; every slot is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    glyphs: [String; 4],
}

impl SymbolSet {
    pub fn new(
        empty: impl Into<String>,
        passthrough: impl Into<String>,
        junction: impl Into<String>,
        terminal: impl Into<String>,
    ) -> Self {
        Self {
            glyphs: [
                empty.into(),
                passthrough.into(),
                junction.into(),
                terminal.into(),
            ],
        }
    }

    pub fn get(&self, state: LaneState) -> &str {
        &self.glyphs[state.ordinal()]
    }

    /// Return a copy with every present override applied.
    pub fn with_overrides(&self, overrides: &SymbolOverrides) -> Self {
        let mut glyphs = self.glyphs.clone();
        for state in LaneState::ALL {
            if let Some(glyph) = overrides.get(state) {
                glyphs[state.ordinal()] = glyph.to_string();
            }
        }
        Self { glyphs }
    }
}

impl Index<LaneState> for SymbolSet {
    type Output = str;

    fn index(&self, state: LaneState) -> &str {
        self.get(state)
    }
}

/// Optional per-state replacement glyphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolOverrides {
    glyphs: [Option<String>; 4],
}

impl SymbolOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, state: LaneState, glyph: impl Into<String>) -> Self {
        self.set(state, glyph);
        self
    }

    pub fn set(&mut self, state: LaneState, glyph: impl Into<String>) {
        self.glyphs[state.ordinal()] = Some(glyph.into());
    }

    pub fn get(&self, state: LaneState) -> Option<&str> {
        self.glyphs[state.ordinal()].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.iter().all(Option::is_none)
    }

    /// Overlay `other` onto self, `other` wins where both are set.
    pub fn merged(&self, other: &SymbolOverrides) -> Self {
        let mut merged = self.clone();
        for state in LaneState::ALL {
            if let Some(glyph) = other.get(state) {
                merged.set(state, glyph);
            }
        }
        merged
    }
}
