//! Placement of goals on a 4×4 grid covering the 90 minutes of regulation time, one cell per
//! 5.625-minute interval. Stoppage and extra time fold into the last cell.

use std::ops::Range;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{trace, warn};

pub const MATCH_MINUTES: f64 = 90.0;
pub const ROWS: u8 = 4;
pub const COLUMNS: u8 = 4;
pub const QUADRANTS: u8 = ROWS * COLUMNS;

/// Splits `total` into `count` equal half-open intervals.
pub fn intervals(total: f64, count: usize) -> Vec<Range<f64>> {
    let length = total / count as f64;
    (0..count)
        .map(|index| index as f64 * length..(index + 1) as f64 * length)
        .collect()
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalGridPosition {
    pub quadrant: u8,
    pub row: u8,
    pub column: u8,
}
impl GoalGridPosition {
    pub fn from_quadrant(quadrant: u8) -> Self {
        debug_assert!(quadrant < QUADRANTS, "quadrant {quadrant} out of range");
        Self {
            quadrant,
            row: quadrant / COLUMNS + 1,
            column: quadrant % COLUMNS + 1,
        }
    }

    /// A position from one-based `row` and `column`.
    pub fn from_cell(row: u8, column: u8) -> Result<Self, InvalidCell> {
        if !(1..=ROWS).contains(&row) || !(1..=COLUMNS).contains(&column) {
            return Err(InvalidCell { row, column });
        }
        Ok(Self::from_quadrant((row - 1) * COLUMNS + column - 1))
    }

    pub fn last() -> Self {
        Self::from_quadrant(QUADRANTS - 1)
    }

    /// The cell to the right, wrapping onto the next row; `None` past the last cell.
    pub fn next(&self) -> Option<Self> {
        (self.quadrant + 1 < QUADRANTS).then(|| Self::from_quadrant(self.quadrant + 1))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cell ({row}, {column}) outside the 4x4 grid")]
pub struct InvalidCell {
    pub row: u8,
    pub column: u8,
}

/// Locates the cell for a goal scored in the given minute. Negative minutes clamp to the first
/// cell; the 90th minute and beyond clamp to the last.
pub fn place(minute: i32) -> GoalGridPosition {
    if minute < 0 {
        return GoalGridPosition::from_quadrant(0);
    }
    let minute = minute as f64;
    intervals(MATCH_MINUTES, QUADRANTS as usize)
        .iter()
        .position(|interval| interval.contains(&minute))
        .map(|quadrant| GoalGridPosition::from_quadrant(quadrant as u8))
        .unwrap_or_else(GoalGridPosition::last)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOverride {
    pub match_id: u32,
    pub event_index: usize,
    pub row: u8,
    pub column: u8,
}

/// Hand-curated corrections, keyed by match and the event's index in the merged timeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    positions: FxHashMap<(u32, usize), GoalGridPosition>,
}
impl Overrides {
    pub fn get(&self, match_id: u32, event_index: usize) -> Option<GoalGridPosition> {
        self.positions.get(&(match_id, event_index)).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl TryFrom<&[PlacementOverride]> for Overrides {
    type Error = InvalidCell;

    fn try_from(entries: &[PlacementOverride]) -> Result<Self, Self::Error> {
        let mut positions = FxHashMap::default();
        for entry in entries {
            let position = GoalGridPosition::from_cell(entry.row, entry.column)?;
            positions.insert((entry.match_id, entry.event_index), position);
        }
        Ok(Self { positions })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    None,
    Shifted,
    Unresolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub position: GoalGridPosition,
    pub collision: Collision,
}

/// Tracks which cells already hold a goal. An occupied cell pushes the next goal one cell to
/// the right; a goal that still lands on an occupied cell, or collides in the last cell, stays
/// where it is and overlaps.
#[derive(Debug, Default)]
pub struct GoalGrid {
    occupied: [bool; QUADRANTS as usize],
}
impl GoalGrid {
    pub fn place(&mut self, candidate: GoalGridPosition) -> Placement {
        let placement = if !self.is_occupied(&candidate) {
            Placement {
                position: candidate,
                collision: Collision::None,
            }
        } else {
            match candidate.next() {
                Some(shifted) if !self.is_occupied(&shifted) => Placement {
                    position: shifted,
                    collision: Collision::Shifted,
                },
                Some(shifted) => Placement {
                    position: shifted,
                    collision: Collision::Unresolved,
                },
                None => Placement {
                    position: candidate,
                    collision: Collision::Unresolved,
                },
            }
        };
        self.occupied[placement.position.quadrant as usize] = true;
        placement
    }

    pub fn is_occupied(&self, position: &GoalGridPosition) -> bool {
        self.occupied[position.quadrant as usize]
    }
}

/// Places every goal of a match, in timeline order, applying any overrides before the
/// collision check.
pub fn place_timeline(
    match_id: u32,
    minutes: impl IntoIterator<Item = i32>,
    overrides: &Overrides,
) -> Vec<GoalGridPosition> {
    let mut grid = GoalGrid::default();
    minutes
        .into_iter()
        .enumerate()
        .map(|(event_index, minute)| {
            let candidate = overrides
                .get(match_id, event_index)
                .unwrap_or_else(|| place(minute));
            let placement = grid.place(candidate);
            trace!("match {match_id}, goal {event_index} at {minute}': {placement:?}");
            if placement.collision == Collision::Unresolved {
                warn!(
                    "match {match_id}, goal {event_index} at {minute}' overlaps cell {}",
                    placement.position.quadrant
                );
            }
            placement.position
        })
        .collect()
}

#[cfg(test)]
mod tests;
