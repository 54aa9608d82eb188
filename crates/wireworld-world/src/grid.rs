//! Sparse grid: coordinates to cell states.
//!
//! The [`Grid`] stores only non-empty cells. Reading a coordinate that was
//! never written (or was written back to empty) yields
//! [`CellState::Empty`]; this default is part of the grid's contract, not an
//! artifact of the backing map.
//!
//! Internally the grid is a `BTreeMap<Cell, CellState>`. [`Cell`] orders
//! row-major, so [`Grid::iter`] visits stored cells in the same order the
//! renderer scans the board.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wireworld_types::{Cell, CellState, SimulationBounds};

/// A Wireworld board.
///
/// Grids are plain values: the stepper reads one grid and produces a fresh
/// one, and edits between generations mutate the grid in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// Non-empty cells indexed by coordinate.
    cells: BTreeMap<Cell, CellState>,
}

/// Per-state count of the cells stored in a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    /// Number of electron heads.
    pub heads: usize,
    /// Number of electron tails.
    pub tails: usize,
    /// Number of conductors.
    pub conductors: usize,
}

impl Census {
    /// Number of cells currently carrying a signal.
    pub const fn electrons(&self) -> usize {
        self.heads.saturating_add(self.tails)
    }
}

impl Grid {
    /// Create an empty grid.
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Return the state at `cell`, or [`CellState::Empty`] if it was never set.
    pub fn get(&self, cell: Cell) -> CellState {
        self.cells.get(&cell).copied().unwrap_or_default()
    }

    /// Set the state at `cell`, returning the previous state.
    ///
    /// Writing [`CellState::Empty`] removes the entry.
    pub fn set(&mut self, cell: Cell, state: CellState) -> CellState {
        let previous = if state == CellState::Empty {
            self.cells.remove(&cell)
        } else {
            self.cells.insert(cell, state)
        };
        previous.unwrap_or_default()
    }

    /// Replace the state at `cell` with `f(current)` and return the new state.
    pub fn update(&mut self, cell: Cell, f: impl FnOnce(CellState) -> CellState) -> CellState {
        let next = f(self.get(cell));
        self.set(cell, next);
        next
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of stored (non-empty) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether every cell reads as empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over stored cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells.iter().map(|(cell, state)| (*cell, *state))
    }

    /// Iterate over the stored cells holding `state`, in row-major order.
    pub fn cells_in_state(&self, state: CellState) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(move |(_, s)| *s == state)
            .map(|(cell, _)| cell)
    }

    /// Count cells holding `state`.
    ///
    /// Counting [`CellState::Empty`] returns 0: empty cells are unbounded
    /// and never stored.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.values().filter(|s| **s == state).count()
    }

    /// Count stored cells per state.
    pub fn census(&self) -> Census {
        self.cells
            .values()
            .fold(Census::default(), |mut census, state| {
                match state {
                    CellState::ElectronHead => census.heads = census.heads.saturating_add(1),
                    CellState::ElectronTail => census.tails = census.tails.saturating_add(1),
                    CellState::Conductor => {
                        census.conductors = census.conductors.saturating_add(1);
                    }
                    CellState::Empty => {}
                }
                census
            })
    }

    /// Scan the rectangle `bounds` in row-major order, yielding the state of
    /// every cell including empty ones.
    pub fn scan(&self, bounds: SimulationBounds) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        bounds.cells().map(|cell| (cell, self.get(cell)))
    }

    /// Whether any stored cell lies outside `bounds`.
    pub fn has_cells_outside(&self, bounds: SimulationBounds) -> bool {
        self.cells.keys().any(|cell| !bounds.contains(*cell))
    }
}

impl FromIterator<(Cell, CellState)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Cell, CellState)>>(iter: I) -> Self {
        let mut grid = Self::new();
        grid.extend(iter);
        grid
    }
}

impl Extend<(Cell, CellState)> for Grid {
    fn extend<I: IntoIterator<Item = (Cell, CellState)>>(&mut self, iter: I) {
        for (cell, state) in iter {
            self.set(cell, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cells_read_as_empty() {
        let grid = Grid::new();
        assert_eq!(grid.get(Cell::new(0, 0)), CellState::Empty);
        assert_eq!(grid.get(Cell::new(-40, 1_000_000)), CellState::Empty);
    }

    #[test]
    fn set_returns_previous_state() {
        let mut grid = Grid::new();
        let cell = Cell::new(2, 3);
        assert_eq!(grid.set(cell, CellState::Conductor), CellState::Empty);
        assert_eq!(grid.set(cell, CellState::ElectronHead), CellState::Conductor);
        assert_eq!(grid.get(cell), CellState::ElectronHead);
    }

    #[test]
    fn writing_empty_removes_entry() {
        let mut grid = Grid::new();
        let cell = Cell::new(1, 1);
        grid.set(cell, CellState::Conductor);
        assert_eq!(grid.len(), 1);
        grid.set(cell, CellState::Empty);
        assert!(grid.is_empty());
        assert_eq!(grid.get(cell), CellState::Empty);
    }

    #[test]
    fn update_applies_function_in_place() {
        let mut grid = Grid::new();
        let cell = Cell::new(0, 0);
        let next = grid.update(cell, |_| CellState::ElectronTail);
        assert_eq!(next, CellState::ElectronTail);
        assert_eq!(grid.get(cell), CellState::ElectronTail);
    }

    #[test]
    fn census_counts_each_state() {
        let grid: Grid = [
            (Cell::new(0, 0), CellState::ElectronHead),
            (Cell::new(1, 0), CellState::ElectronTail),
            (Cell::new(2, 0), CellState::Conductor),
            (Cell::new(3, 0), CellState::Conductor),
            (Cell::new(4, 0), CellState::Empty),
        ]
        .into_iter()
        .collect();
        let census = grid.census();
        assert_eq!(census.heads, 1);
        assert_eq!(census.tails, 1);
        assert_eq!(census.conductors, 2);
        assert_eq!(census.electrons(), 2);
        assert_eq!(grid.count(CellState::Conductor), 2);
        assert_eq!(grid.count(CellState::Empty), 0);
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn scan_covers_bounds_row_major_with_defaults() {
        let grid: Grid = [(Cell::new(1, 0), CellState::Conductor)].into_iter().collect();
        let scanned: Vec<(Cell, CellState)> = grid.scan(SimulationBounds::new(2, 2)).collect();
        assert_eq!(
            scanned,
            vec![
                (Cell::new(0, 0), CellState::Empty),
                (Cell::new(1, 0), CellState::Conductor),
                (Cell::new(0, 1), CellState::Empty),
                (Cell::new(1, 1), CellState::Empty),
            ]
        );
    }

    #[test]
    fn iteration_is_row_major() {
        let grid: Grid = [
            (Cell::new(0, 2), CellState::Conductor),
            (Cell::new(5, 0), CellState::Conductor),
            (Cell::new(1, 2), CellState::ElectronHead),
        ]
        .into_iter()
        .collect();
        let order: Vec<Cell> = grid.iter().map(|(cell, _)| cell).collect();
        assert_eq!(order, vec![Cell::new(5, 0), Cell::new(0, 2), Cell::new(1, 2)]);
        let heads: Vec<Cell> = grid.cells_in_state(CellState::ElectronHead).collect();
        assert_eq!(heads, vec![Cell::new(1, 2)]);
    }

    #[test]
    fn detects_cells_outside_bounds() {
        let mut grid = Grid::new();
        grid.set(Cell::new(3, 3), CellState::Conductor);
        assert!(!grid.has_cells_outside(SimulationBounds::new(4, 4)));
        grid.set(Cell::new(4, 0), CellState::Conductor);
        assert!(grid.has_cells_outside(SimulationBounds::new(4, 4)));
    }

    #[test]
    fn clear_empties_the_grid() {
        let mut grid: Grid = [(Cell::new(0, 0), CellState::Conductor)].into_iter().collect();
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn census_serializes_as_object() {
        let census = Census {
            heads: 1,
            tails: 2,
            conductors: 3,
        };
        let json = serde_json::to_value(census).ok();
        assert_eq!(
            json.and_then(|v| v.get("conductors").and_then(serde_json::Value::as_u64)),
            Some(3)
        );
    }
}
