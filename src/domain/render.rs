//! Turning lane states into text.

use crate::domain::lanes::lanes_from_depths;
use crate::domain::{LaneState, Line, SymbolSet};

/// Render lines as a tree using the given symbols.
pub fn render(lines: &[Line], symbols: &SymbolSet) -> Vec<String> {
    let depths: Vec<usize> = lines.iter().map(|l| l.nesting).collect();
    let lanes = lanes_from_depths(&depths);
    render_matrix(&lanes, lines.iter().map(|l| l.text.as_str()), symbols)
}

/// Render a precomputed lane matrix row by row, appending each text verbatim.
pub fn render_matrix<'a>(
    lanes: &[Vec<LaneState>],
    texts: impl IntoIterator<Item = &'a str>,
    symbols: &SymbolSet,
) -> Vec<String> {
    lanes
        .iter()
        .zip(texts)
        .map(|(row, text)| {
            let mut out = String::new();
            for &state in row {
                out.push_str(symbols.get(state));
            }
            out.push_str(text);
            out
        })
        .collect()
}
