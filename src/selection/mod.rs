//! Selection coordinates, range normalization, and endpoint resolution.

mod text;

#[cfg(test)]
mod tests;

pub use text::{serialize_range, serialize_selection};

use std::cmp::Ordering;

use thiserror::Error;

use crate::document::{CELL_ID_PREFIX, SelectionNode};

/// A 1-based (row, column) position in the rendered grid.
///
/// Rows increase downward, columns rightward, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Coordinate {
    /// Deterministic identifier of the cell at this position.
    pub fn cell_id(self) -> String {
        format!("{CELL_ID_PREFIX}-{}-{}", self.row, self.col)
    }

    /// Parses a coordinate out of a cell identifier.
    ///
    /// The identifier is dash-delimited with the row and column as its
    /// last two segments (`exterm-cell-3-12`). Too few segments,
    /// non-decimal segments, and zero row/column all fail.
    pub fn from_cell_id(id: &str) -> Option<Self> {
        let segments: Vec<&str> = id.split('-').collect();
        if segments.len() < 4 {
            return None;
        }
        let row = segments[segments.len() - 2].parse().ok()?;
        let col = segments[segments.len() - 1].parse().ok()?;
        if row == 0 || col == 0 {
            return None;
        }
        Some(Self { row, col })
    }
}

/// A selection endpoint (or its owning element) without a parsable cell
/// identifier. The surrounding copy is aborted; nothing reaches the
/// clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("selection endpoint carries no parsable cell identifier")]
pub struct IdentifierMissing;

/// Derives the grid coordinate for one selection endpoint.
pub fn resolve_coordinate(node: SelectionNode<'_>) -> Result<Coordinate, IdentifierMissing> {
    node.identifier()
        .and_then(Coordinate::from_cell_id)
        .ok_or(IdentifierMissing)
}

/// A normalized selection: `start` precedes or equals `end` in row-major
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Range {
    /// Orders `anchor` and `focus` into a canonical range.
    ///
    /// Symmetric in its arguments; the drag direction of the selection
    /// does not matter.
    pub fn normalized(anchor: Coordinate, focus: Coordinate) -> Self {
        if focus < anchor {
            Self {
                start: focus,
                end: anchor,
            }
        } else {
            Self {
                start: anchor,
                end: focus,
            }
        }
    }
}
