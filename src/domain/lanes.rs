//! Lane computation: which glyph goes in each ancestor column of each line.
//!
//! Lines are visited bottom-up. A column stays open for a line when the row
//! directly below it has a non-empty state in that column; that single row
//! already carries everything further down, since an `Empty` cell closes the
//! column for every row above until a deeper line reopens it.

use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::{LaneMatrix, LaneState};

/// How jumps of more than one level between consecutive lines are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepthPolicy {
    /// Accept any jump; the skipped columns render as if nothing was above.
    #[default]
    Lenient,
    /// Reject a line nested more than one level below its predecessor.
    Strict,
}

impl DepthPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            DepthPolicy::Strict
        } else {
            DepthPolicy::Lenient
        }
    }
}

/// Compute the lane matrix for signed nesting values.
///
/// # Errors
/// `InvalidDepth` for the first negative value; nothing is computed in that case.
pub fn compute_lanes(nestings: &[i64]) -> DomainResult<LaneMatrix> {
    let depths = nestings
        .iter()
        .enumerate()
        .map(|(index, &depth)| {
            usize::try_from(depth).map_err(|_| DomainError::InvalidDepth { index, depth })
        })
        .collect::<DomainResult<Vec<usize>>>()?;
    Ok(lanes_from_depths(&depths))
}

/// Compute the lane matrix for already validated depths.
pub fn lanes_from_depths(depths: &[usize]) -> LaneMatrix {
    let mut lanes: LaneMatrix = vec![Vec::new(); depths.len()];

    for (i, &nesting) in depths.iter().enumerate().rev() {
        let below = lanes.get(i + 1).map(Vec::as_slice).unwrap_or_default();
        let row: Vec<LaneState> = (0..nesting)
            .map(|j| {
                let open = below.get(j).is_some_and(|&s| s != LaneState::Empty);
                match (j + 1 == nesting, open) {
                    (true, true) => LaneState::Junction,
                    (true, false) => LaneState::Terminal,
                    (false, true) => LaneState::Passthrough,
                    (false, false) => LaneState::Empty,
                }
            })
            .collect();
        trace!(line = i, nesting, ?row, "lanes");
        lanes[i] = row;
    }

    lanes
}

/// Check depths against a policy.
///
/// Only consecutive lines are compared, so the first line may start at any depth.
pub fn check_depths(depths: &[usize], policy: DepthPolicy) -> DomainResult<()> {
    if policy == DepthPolicy::Lenient {
        return Ok(());
    }
    for (index, pair) in depths.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        if to > from + 1 {
            return Err(DomainError::DepthJump {
                index: index + 1,
                from,
                to,
            });
        }
    }
    Ok(())
}
