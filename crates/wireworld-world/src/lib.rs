//! Grid storage, neighborhoods, and circuit templates for the Wireworld
//! simulation.
//!
//! This crate models the board itself: a sparse map from coordinates to
//! cell states, the head-neighbor count the transition rule depends on, and
//! the library of logic-gate templates that can be stamped onto a board.
//!
//! # Modules
//!
//! - [`error`] -- Error types for pattern lookup and ignition.
//! - [`grid`] -- [`Grid`], the sparse coordinate-to-state store where an
//!   absent key reads as [`CellState::Empty`].
//! - [`neighborhood`] -- Electron-head counting over the fixed Moore
//!   neighborhood.
//! - [`pattern`] -- [`PatternKind`] templates (timer, diode, OR, XOR, NOT)
//!   and pulse ignition for ring templates.
//!
//! [`CellState::Empty`]: wireworld_types::CellState::Empty

pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod pattern;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use grid::{Census, Grid};
pub use neighborhood::count_heads;
pub use pattern::PatternKind;
