//! Plain-text rendering of the bounded grid.
//!
//! One character per cell, one line per row, scanned row-major. Cells
//! outside the bounds are never rendered.

use wireworld_types::{CellState, SimulationBounds};
use wireworld_world::Grid;

/// Character used for `state`.
pub const fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::ElectronHead => '@',
        CellState::ElectronTail => '~',
        CellState::Conductor => '#',
    }
}

/// Render `grid` within `bounds` as text, rows separated by `\n`.
pub fn frame(grid: &Grid, bounds: SimulationBounds) -> String {
    let width = usize::try_from(bounds.width).unwrap_or(usize::MAX);
    let mut out = String::new();
    for (index, (_, state)) in grid.scan(bounds).enumerate() {
        if index > 0 && index.checked_rem(width) == Some(0) {
            out.push('\n');
        }
        out.push(glyph(state));
    }
    out
}

#[cfg(test)]
mod tests {
    use wireworld_types::Cell;

    use super::*;

    #[test]
    fn renders_rows_top_to_bottom() {
        let grid: Grid = [
            (Cell::new(0, 0), CellState::ElectronTail),
            (Cell::new(1, 0), CellState::ElectronHead),
            (Cell::new(2, 1), CellState::Conductor),
            (Cell::new(9, 9), CellState::Conductor),
        ]
        .into_iter()
        .collect();
        assert_eq!(frame(&grid, SimulationBounds::new(3, 2)), "~@.\n..#");
    }

    #[test]
    fn empty_bounds_render_nothing() {
        assert_eq!(frame(&Grid::new(), SimulationBounds::new(0, 3)), "");
    }
}
