//! Paced frame loop with run limits.
//!
//! [`run_simulation`] stands in for the window layer: it calls
//! [`Simulation::frame`] once per frame interval until a limit is reached,
//! the circuit goes quiescent, or the simulation is paused with nothing left
//! to resume it.

use serde::Serialize;
use tracing::{info, warn};
use wireworld_core::config::SimulationConfig;
use wireworld_core::simulation::{FrameSummary, Simulation, SimulationError};
use wireworld_world::Census;

/// Reason the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Reached the configured `max_generations` limit.
    MaxGenerationsReached,
    /// Reached the configured `max_frames` limit.
    MaxFramesReached,
    /// No electron heads or tails remain.
    Quiescent,
    /// The simulation is paused and a headless run cannot resume it.
    Paused,
}

/// Limits for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLimits {
    /// Stop after this many generations (0 = unlimited).
    pub max_generations: u64,
    /// Stop after this many frames (0 = unlimited).
    pub max_frames: u64,
    /// Stop once no electrons remain.
    pub stop_when_quiescent: bool,
    /// Real-time milliseconds between frames.
    pub frame_interval_ms: u64,
}

impl RunLimits {
    /// Limits taken from the `run` and `timing` config sections.
    pub const fn from_config(config: &SimulationConfig) -> Self {
        Self {
            max_generations: config.run.max_generations,
            max_frames: config.run.max_frames,
            stop_when_quiescent: config.run.stop_when_quiescent,
            frame_interval_ms: config.timing.frame_interval_ms,
        }
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Why the run ended.
    pub end_reason: EndReason,
    /// Frames processed.
    pub frames: u64,
    /// Generations stepped.
    pub generations: u64,
    /// Cell counts at the end of the run.
    pub final_census: Census,
}

/// Callback invoked after each frame.
pub trait FrameCallback {
    /// Called after a frame completes.
    fn on_frame(&mut self, summary: &FrameSummary, sim: &Simulation);
}

/// Drive `sim` until a termination condition is met.
///
/// # Errors
///
/// Returns [`SimulationError`] if a frame fails.
pub async fn run_simulation(
    sim: &mut Simulation,
    limits: &RunLimits,
    callback: &mut dyn FrameCallback,
) -> Result<RunResult, SimulationError> {
    info!(
        max_generations = limits.max_generations,
        max_frames = limits.max_frames,
        frame_interval_ms = limits.frame_interval_ms,
        frames_per_generation = sim.clock().frames_per_generation(),
        "Run starting"
    );

    loop {
        // --- Check pause ---
        if !sim.is_running() {
            warn!(generation = sim.generation(), "Simulation paused, nothing can resume it");
            return Ok(finish(sim, EndReason::Paused));
        }

        // --- Check quiescence (before frame) ---
        if limits.stop_when_quiescent && sim.census().electrons() == 0 {
            info!(generation = sim.generation(), "No electrons left");
            return Ok(finish(sim, EndReason::Quiescent));
        }

        // --- Execute frame ---
        let summary = sim.frame()?;
        callback.on_frame(&summary, sim);

        // --- Check limits (after frame) ---
        if limits.max_generations > 0 && summary.generation >= limits.max_generations {
            info!(
                generation = summary.generation,
                max_generations = limits.max_generations,
                "Generation limit reached"
            );
            return Ok(finish(sim, EndReason::MaxGenerationsReached));
        }
        if limits.max_frames > 0 && summary.frame >= limits.max_frames {
            info!(
                frame = summary.frame,
                max_frames = limits.max_frames,
                "Frame limit reached"
            );
            return Ok(finish(sim, EndReason::MaxFramesReached));
        }

        // --- Sleep for frame interval ---
        if limits.frame_interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(limits.frame_interval_ms)).await;
        }
    }
}

fn finish(sim: &Simulation, end_reason: EndReason) -> RunResult {
    RunResult {
        end_reason,
        frames: sim.clock().total_frames(),
        generations: sim.generation(),
        final_census: sim.census(),
    }
}

/// Log the end of a run.
pub fn log_run_end(result: &RunResult) {
    info!(
        reason = ?result.end_reason,
        frames = result.frames,
        generations = result.generations,
        heads = result.final_census.heads,
        tails = result.final_census.tails,
        conductors = result.final_census.conductors,
        "Run ended"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wireworld_types::{Cell, SimulationBounds};
    use wireworld_world::PatternKind;

    use super::*;

    fn limits(max_generations: u64, max_frames: u64) -> RunLimits {
        RunLimits {
            max_generations,
            max_frames,
            stop_when_quiescent: true,
            frame_interval_ms: 0,
        }
    }

    fn timer_sim(frames_per_generation: u64) -> Simulation {
        let mut sim = Simulation::new(SimulationBounds::new(30, 20), frames_per_generation).unwrap();
        let anchor = Cell::new(5, 5);
        sim.stamp(PatternKind::Timer, anchor);
        sim.ignite(PatternKind::Timer, anchor, 1).unwrap();
        sim
    }

    struct NoOpCallback;

    impl FrameCallback for NoOpCallback {
        fn on_frame(&mut self, _summary: &FrameSummary, _sim: &Simulation) {}
    }

    struct CountingCallback {
        frames: u64,
        steps: u64,
    }

    impl FrameCallback for CountingCallback {
        fn on_frame(&mut self, summary: &FrameSummary, _sim: &Simulation) {
            self.frames += 1;
            if summary.stepped {
                self.steps += 1;
            }
        }
    }

    #[tokio::test]
    async fn empty_scene_is_quiescent_immediately() {
        let mut sim = Simulation::new(SimulationBounds::new(10, 10), 1).unwrap();
        let result = run_simulation(&mut sim, &limits(100, 0), &mut NoOpCallback)
            .await
            .unwrap();
        assert_eq!(result.end_reason, EndReason::Quiescent);
        assert_eq!(result.frames, 0);
        assert_eq!(result.generations, 0);
    }

    #[tokio::test]
    async fn oscillator_runs_to_generation_limit() {
        let mut sim = timer_sim(2);
        let mut callback = CountingCallback { frames: 0, steps: 0 };
        let result = run_simulation(&mut sim, &limits(25, 0), &mut callback)
            .await
            .unwrap();
        assert_eq!(result.end_reason, EndReason::MaxGenerationsReached);
        assert_eq!(result.generations, 25);
        assert_eq!(result.frames, 50);
        assert_eq!(callback.frames, 50);
        assert_eq!(callback.steps, 25);
        assert_eq!(result.final_census.heads, 1);
    }

    #[tokio::test]
    async fn frame_limit_stops_before_generation_limit() {
        let mut sim = timer_sim(10);
        let result = run_simulation(&mut sim, &limits(0, 35), &mut NoOpCallback)
            .await
            .unwrap();
        assert_eq!(result.end_reason, EndReason::MaxFramesReached);
        assert_eq!(result.frames, 35);
        assert_eq!(result.generations, 3);
    }

    #[tokio::test]
    async fn split_pulse_goes_quiescent() {
        let mut sim = Simulation::new(SimulationBounds::new(30, 20), 1).unwrap();
        let anchor = Cell::new(5, 5);
        sim.stamp(PatternKind::Timer, anchor);
        sim.cycle_cell(anchor);
        let result = run_simulation(&mut sim, &limits(100, 0), &mut NoOpCallback)
            .await
            .unwrap();
        assert_eq!(result.end_reason, EndReason::Quiescent);
        assert_eq!(result.generations, 7);
        assert_eq!(result.final_census.conductors, 10);
    }

    #[tokio::test]
    async fn paused_simulation_ends_without_frames() {
        let mut sim = timer_sim(1);
        sim.set_running(false);
        let result = run_simulation(&mut sim, &limits(10, 0), &mut NoOpCallback)
            .await
            .unwrap();
        assert_eq!(result.end_reason, EndReason::Paused);
        assert_eq!(result.frames, 0);
    }

    #[test]
    fn limits_follow_config() {
        let mut config = SimulationConfig::default();
        config.run.max_frames = 9;
        config.timing.frame_interval_ms = 3;
        let limits = RunLimits::from_config(&config);
        assert_eq!(limits.max_generations, 500);
        assert_eq!(limits.max_frames, 9);
        assert!(limits.stop_when_quiescent);
        assert_eq!(limits.frame_interval_ms, 3);
    }

    #[test]
    fn result_serializes_with_snake_case_reason() {
        let result = RunResult {
            end_reason: EndReason::MaxGenerationsReached,
            frames: 1,
            generations: 1,
            final_census: Census::default(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json.get("end_reason").and_then(serde_json::Value::as_str),
            Some("max_generations_reached")
        );
    }
}
