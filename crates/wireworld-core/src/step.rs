//! Generation stepping: whole-grid replacement over a bounded rectangle.
//!
//! [`step`] never mutates its input. Every in-bounds cell of the next
//! generation is computed from the previous snapshot alone, so the result
//! does not depend on visiting order.
//!
//! Only cells inside the [`SimulationBounds`] are carried into the result.
//! Cells that were written outside the rectangle (for example by a template
//! stamped near an edge) are frozen while they exist and are dropped by the
//! next step.

use wireworld_types::{CellState, SimulationBounds};
use wireworld_world::{Grid, count_heads};

use crate::rule::next_state;

/// Compute the next generation of `grid` within `bounds`.
///
/// Cells are visited in row-major order. Empty results are not stored.
pub fn step(grid: &Grid, bounds: SimulationBounds) -> Grid {
    bounds
        .cells()
        .filter_map(|cell| {
            let current = grid.get(cell);
            if current == CellState::Empty {
                return None;
            }
            let next = next_state(current, count_heads(grid, cell));
            Some((cell, next))
        })
        .collect()
}

/// Apply [`step`] `generations` times.
pub fn step_n(grid: &Grid, bounds: SimulationBounds, generations: u64) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = step(&current, bounds);
    }
    current
}
