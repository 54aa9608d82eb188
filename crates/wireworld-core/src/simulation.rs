//! The simulation context: one grid, its bounds, a running flag, and the
//! generation clock, owned by a single controller.
//!
//! Edits ([`Command`]s) and frames are applied through `&mut self`, so they
//! are serialized by construction: a step always reads a complete snapshot
//! of the previous generation and replaces the grid wholesale.

use serde::Serialize;
use tracing::{debug, info};
use wireworld_types::{Cell, CellState, SimulationBounds};
use wireworld_world::{Census, Grid, PatternKind, WorldError};

use crate::clock::{ClockError, GenerationClock};
use crate::command::Command;
use crate::config::{ConfigError, SimulationConfig};
use crate::editor;
use crate::step::step;

/// Errors that can occur while driving the simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// A template operation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The configuration could not be turned into a simulation.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },
}

/// Summary of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameSummary {
    /// Frames counted so far, including this one.
    pub frame: u64,
    /// Generation number after this frame.
    pub generation: u64,
    /// Whether this frame replaced the grid.
    pub stepped: bool,
    /// Whether the simulation was running during this frame.
    pub running: bool,
    /// Cell counts after this frame.
    pub census: Census,
}

/// Grid plus the control state of one simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Current generation.
    grid: Grid,
    /// Rectangle advanced by each step.
    bounds: SimulationBounds,
    /// Frame and generation counters.
    clock: GenerationClock,
    /// Whether frames advance the clock.
    running: bool,
}

impl Simulation {
    /// Create a running simulation over an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Clock`] if `frames_per_generation` is 0.
    pub fn new(
        bounds: SimulationBounds,
        frames_per_generation: u64,
    ) -> Result<Self, SimulationError> {
        Ok(Self {
            grid: Grid::new(),
            bounds,
            clock: GenerationClock::new(frames_per_generation)?,
            running: true,
        })
    }

    /// Create a simulation from configuration and apply its placements.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] for an invalid configuration and
    /// [`SimulationError::World`] if a placement cannot be applied.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let viewport = config.world.viewport().map_err(ConfigError::from)?;
        let mut sim = Self::new(viewport.bounds(), config.timing.frames_per_generation)?;
        sim.running = config.run.start_running;
        for placement in &config.placements {
            for command in placement.commands() {
                sim.apply(command)?;
            }
        }
        info!(
            width = sim.bounds.width,
            height = sim.bounds.height,
            placements = config.placements.len(),
            cells = sim.grid.len(),
            running = sim.running,
            "Simulation created from config"
        );
        Ok(sim)
    }

    // -------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------

    /// The current generation's grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The rectangle advanced by each step.
    pub const fn bounds(&self) -> SimulationBounds {
        self.bounds
    }

    /// The frame and generation clock.
    pub const fn clock(&self) -> &GenerationClock {
        &self.clock
    }

    /// Number of generations stepped so far.
    pub const fn generation(&self) -> u64 {
        self.clock.generation()
    }

    /// Whether frames currently advance the simulation.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Cell counts of the current grid.
    pub fn census(&self) -> Census {
        self.grid.census()
    }

    // -------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::World`] if an ignition is rejected.
    pub fn apply(&mut self, command: Command) -> Result<(), SimulationError> {
        match command {
            Command::Cycle { cell } => {
                self.cycle_cell(cell);
            }
            Command::Stamp { pattern, anchor } => {
                self.stamp(pattern, anchor);
            }
            Command::Ignite {
                pattern,
                anchor,
                position,
            } => {
                self.ignite(pattern, anchor, position)?;
            }
            Command::ToggleRunning => {
                self.toggle_running();
            }
            Command::Clear => self.clear(),
        }
        Ok(())
    }

    /// Advance `cell` one step through the editor cycle and return its new
    /// state.
    pub fn cycle_cell(&mut self, cell: Cell) -> CellState {
        let state = self.grid.update(cell, editor::cycle);
        debug!(cell = %cell, state = %state, "Cell edited");
        state
    }

    /// Stamp `pattern` at `anchor` and return the number of cells written.
    pub fn stamp(&mut self, pattern: PatternKind, anchor: Cell) -> usize {
        pattern.stamp(&mut self.grid, anchor)
    }

    /// Start a pulse on the ring `pattern` anchored at `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::World`] if `pattern` is not a ring or
    /// `position` is not on it.
    pub fn ignite(
        &mut self,
        pattern: PatternKind,
        anchor: Cell,
        position: usize,
    ) -> Result<(Cell, Cell), SimulationError> {
        Ok(pattern.ignite(&mut self.grid, anchor, position)?)
    }

    /// Flip the running flag and return the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.set_running(!self.running);
        self.running
    }

    /// Set the running flag.
    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            info!(running, generation = self.generation(), "Running state changed");
        }
        self.running = running;
    }

    /// Reset the grid to empty. Counters and the running flag are kept.
    pub fn clear(&mut self) {
        info!(
            cleared = self.grid.len(),
            generation = self.generation(),
            "Grid cleared"
        );
        self.grid.clear();
    }

    // -------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------

    /// Process one external frame.
    ///
    /// While running, the clock counts the frame and the grid is replaced
    /// by the next generation whenever one is due. While paused, nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Clock`] if a counter would overflow.
    pub fn frame(&mut self) -> Result<FrameSummary, SimulationError> {
        let stepped = if self.running && self.clock.advance()? {
            self.replace_generation();
            true
        } else {
            false
        };
        Ok(self.summary(stepped))
    }

    /// Step one generation immediately, regardless of the running flag or
    /// cadence.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Clock`] if the generation counter would
    /// overflow.
    pub fn step_now(&mut self) -> Result<FrameSummary, SimulationError> {
        self.clock.record_generation()?;
        self.replace_generation();
        Ok(self.summary(true))
    }

    /// Replace the grid with its successor. The clock has already counted
    /// the generation.
    fn replace_generation(&mut self) {
        self.grid = step(&self.grid, self.bounds);
        let census = self.grid.census();
        debug!(
            generation = self.clock.generation(),
            heads = census.heads,
            tails = census.tails,
            conductors = census.conductors,
            "Generation stepped"
        );
    }

    fn summary(&self, stepped: bool) -> FrameSummary {
        FrameSummary {
            frame: self.clock.total_frames(),
            generation: self.clock.generation(),
            stepped,
            running: self.running,
            census: self.grid.census(),
        }
    }
}
