//! Frame callback that reports progress through `tracing`.
//!
//! Every stepped generation is logged at debug level. When `render_every`
//! is non-zero, the bounded grid is also logged as text every that many
//! generations.

use tracing::debug;
use wireworld_core::render;
use wireworld_core::simulation::{FrameSummary, Simulation};

use crate::runner::FrameCallback;

/// Logs generations and periodic text frames.
pub struct FrameLogger {
    /// Generations between rendered frames (0 = never render).
    render_every: u64,
}

impl FrameLogger {
    /// Create a logger rendering every `render_every` generations.
    pub const fn new(render_every: u64) -> Self {
        Self { render_every }
    }

    const fn should_render(&self, generation: u64) -> bool {
        match generation.checked_rem(self.render_every) {
            Some(rem) => rem == 0,
            None => false,
        }
    }
}

impl FrameCallback for FrameLogger {
    fn on_frame(&mut self, summary: &FrameSummary, sim: &Simulation) {
        if !summary.stepped {
            return;
        }
        debug!(
            generation = summary.generation,
            frame = summary.frame,
            heads = summary.census.heads,
            tails = summary.census.tails,
            conductors = summary.census.conductors,
            "Generation complete"
        );
        if self.should_render(summary.generation) {
            debug!(
                generation = summary.generation,
                "\n{}",
                render::frame(sim.grid(), sim.bounds())
            );
        }
    }
}
