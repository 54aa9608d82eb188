//! Manual single-cell editing.
//!
//! Each click advances a cell one step along
//! empty -> conductor -> electron head, where the head is a fixed point.
//! Tails are transient and are left alone.

use wireworld_types::CellState;

/// Advance `current` by one editor click.
pub const fn cycle(current: CellState) -> CellState {
    match current {
        CellState::Empty => CellState::Conductor,
        CellState::Conductor | CellState::ElectronHead => CellState::ElectronHead,
        CellState::ElectronTail => CellState::ElectronTail,
    }
}

/// Apply `clicks` editor clicks to `current`.
pub fn cycle_times(current: CellState, clicks: u8) -> CellState {
    (0..clicks).fold(current, |state, _| cycle(state))
}
