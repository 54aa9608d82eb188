//! Transition rule, generation stepping, and simulation control for the
//! Wireworld simulation.
//!
//! The kernel is a handful of pure functions: [`rule::next_state`] maps a
//! cell state and its head-neighbor count to the next state, and
//! [`step::step`] applies it across a bounded rectangle to produce the next
//! generation. Everything else in this crate wraps those functions in an
//! explicit simulation context owned by a single controller.
//!
//! # Modules
//!
//! - [`rule`] -- The Wireworld transition rule.
//! - [`editor`] -- The click-to-advance cycle used for manual cell edits.
//! - [`step`] -- Whole-generation replacement over [`SimulationBounds`].
//! - [`clock`] -- Frame counter and generation cadence.
//! - [`config`] -- Configuration loading from `wireworld-config.yaml`.
//! - [`viewport`] -- Device pixel to grid cell mapping.
//! - [`command`] -- Edit and control commands issued by the input layer.
//! - [`simulation`] -- [`Simulation`], the grid plus running flag and clock.
//! - [`render`] -- Plain-text rendering of the bounded grid.
//!
//! [`SimulationBounds`]: wireworld_types::SimulationBounds
//! [`Simulation`]: simulation::Simulation

pub mod clock;
pub mod command;
pub mod config;
pub mod editor;
pub mod render;
pub mod rule;
pub mod simulation;
pub mod step;
pub mod viewport;
