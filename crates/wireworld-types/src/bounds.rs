//! The rectangle advanced by the generation stepper.
//!
//! Only cells with `0 <= x < width` and `0 <= y < height` are ever
//! transitioned. Anything written outside the rectangle is frozen until the
//! next step drops it.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// A `width` x `height` rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationBounds {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl SimulationBounds {
    /// Create bounds of `width` x `height` cells. Zero-sized bounds are legal
    /// and contain no cells.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `cell` lies inside the rectangle.
    pub fn contains(self, cell: Cell) -> bool {
        (0..i64::from(self.width)).contains(&cell.x)
            && (0..i64::from(self.height)).contains(&cell.y)
    }

    /// Number of cells inside the rectangle.
    pub fn area(self) -> u64 {
        u64::from(self.width).saturating_mul(u64::from(self.height))
    }

    /// Whether the rectangle contains no cells.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Iterate over every cell inside the rectangle in row-major order
    /// (`y` outer, `x` inner).
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i64::from(self.width);
        (0..i64::from(self.height)).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let bounds = SimulationBounds::new(3, 2);
        assert!(bounds.contains(Cell::new(0, 0)));
        assert!(bounds.contains(Cell::new(2, 1)));
        assert!(!bounds.contains(Cell::new(3, 1)));
        assert!(!bounds.contains(Cell::new(2, 2)));
        assert!(!bounds.contains(Cell::new(-1, 0)));
    }

    #[test]
    fn cells_are_row_major() {
        let bounds = SimulationBounds::new(2, 2);
        let cells: Vec<Cell> = bounds.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn cell_count_matches_area() {
        let bounds = SimulationBounds::new(60, 40);
        assert_eq!(bounds.area(), 2400);
        assert_eq!(bounds.cells().count(), 2400);
    }

    #[test]
    fn zero_sized_bounds_are_empty() {
        let bounds = SimulationBounds::new(0, 5);
        assert!(bounds.is_empty());
        assert_eq!(bounds.cells().count(), 0);
        assert!(!bounds.contains(Cell::new(0, 0)));
    }
}
