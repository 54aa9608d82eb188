//! Grid coordinates and relative offsets.
//!
//! A [`Cell`] is a plain `(x, y)` pair used as a map key. Offsetting a cell
//! uses checked arithmetic: a coordinate that does not fit in `i64` simply
//! does not exist, so callers get `None` instead of a wrapped position.

use serde::{Deserialize, Serialize};

/// An absolute grid coordinate.
///
/// Ordering is row-major (`y` first, then `x`) so that ordered maps keyed
/// by [`Cell`] iterate in the same order the renderer scans the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column, growing to the right.
    pub x: i64,
    /// Row, growing downward.
    pub y: i64,
}

/// A relative displacement between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellOffset {
    /// Horizontal displacement.
    pub dx: i64,
    /// Vertical displacement.
    pub dy: i64,
}

/// The Moore neighborhood excluding the origin, in fixed order.
pub const NEIGHBOR_OFFSETS: [CellOffset; 8] = [
    CellOffset::new(-1, -1),
    CellOffset::new(-1, 0),
    CellOffset::new(-1, 1),
    CellOffset::new(0, 1),
    CellOffset::new(1, 1),
    CellOffset::new(1, 0),
    CellOffset::new(1, -1),
    CellOffset::new(0, -1),
];

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Return the cell displaced by `offset`, or `None` if either
    /// coordinate would overflow.
    pub const fn offset(self, offset: CellOffset) -> Option<Self> {
        let Some(x) = self.x.checked_add(offset.dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add(offset.dy) else {
            return None;
        };
        Some(Self { x, y })
    }

    /// Iterate over the existing cells of this cell's Moore neighborhood,
    /// in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.offset(offset))
    }
}

impl CellOffset {
    /// Create an offset of `(dx, dy)`.
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
