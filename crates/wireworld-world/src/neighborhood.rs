//! Electron-head counting over the fixed Moore neighborhood.

use wireworld_types::{Cell, CellState};

use crate::grid::Grid;

/// Count the electron heads among the eight neighbors of `cell`.
///
/// Each of the [`NEIGHBOR_OFFSETS`] is looked up exactly once; absent
/// entries read as empty. The result is always in `0..=8`.
///
/// [`NEIGHBOR_OFFSETS`]: wireworld_types::NEIGHBOR_OFFSETS
pub fn count_heads(grid: &Grid, cell: Cell) -> u8 {
    cell.neighbors()
        .filter(|neighbor| grid.get(*neighbor) == CellState::ElectronHead)
        .fold(0_u8, |count, _| count.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use wireworld_types::NEIGHBOR_OFFSETS;

    use super::*;

    fn heads_at(cells: &[(i64, i64)]) -> Grid {
        cells
            .iter()
            .map(|&(x, y)| (Cell::new(x, y), CellState::ElectronHead))
            .collect()
    }

    #[test]
    fn empty_grid_has_no_heads() {
        assert_eq!(count_heads(&Grid::new(), Cell::new(0, 0)), 0);
    }

    #[test]
    fn fully_surrounded_cell_counts_eight() {
        let origin = Cell::new(10, 10);
        let grid: Grid = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|offset| origin.offset(*offset))
            .map(|cell| (cell, CellState::ElectronHead))
            .collect();
        assert_eq!(count_heads(&grid, origin), 8);
    }

    #[test]
    fn origin_itself_is_not_counted() {
        let grid = heads_at(&[(3, 3)]);
        assert_eq!(count_heads(&grid, Cell::new(3, 3)), 0);
    }

    #[test]
    fn cells_two_away_are_ignored() {
        // Ring of distance-2 heads around (5, 5) plus one real neighbor.
        let grid = heads_at(&[(3, 5), (7, 5), (5, 3), (5, 7), (3, 3), (7, 7), (6, 6)]);
        assert_eq!(count_heads(&grid, Cell::new(5, 5)), 1);
    }

    #[test]
    fn only_heads_are_counted() {
        let grid: Grid = [
            (Cell::new(0, 1), CellState::ElectronTail),
            (Cell::new(1, 0), CellState::Conductor),
            (Cell::new(1, 1), CellState::ElectronHead),
        ]
        .into_iter()
        .collect();
        assert_eq!(count_heads(&grid, Cell::new(0, 0)), 1);
    }

    #[test]
    fn counting_at_coordinate_limits_does_not_wrap() {
        let corner = Cell::new(i64::MAX, i64::MAX);
        let grid = heads_at(&[(i64::MIN, i64::MIN), (i64::MAX - 1, i64::MAX)]);
        assert_eq!(count_heads(&grid, corner), 1);
    }
}
