//! Shared type definitions for the Wireworld simulation.
//!
//! This crate holds the value types every other crate in the workspace
//! agrees on: grid coordinates, the four cell states, and the rectangle
//! the stepper advances.
//!
//! # Modules
//!
//! - [`cell`] -- Integer grid coordinates, offsets, and the fixed Moore
//!   neighborhood.
//! - [`state`] -- The [`CellState`] enumeration and its numeric codes.
//! - [`bounds`] -- [`SimulationBounds`], the width x height rectangle with
//!   row-major iteration.

pub mod bounds;
pub mod cell;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use bounds::SimulationBounds;
pub use cell::{Cell, CellOffset, NEIGHBOR_OFFSETS};
pub use state::{CellState, ParseCellStateError};
