//! Headless engine for the Wireworld simulation.
//!
//! This binary stands in for the interactive window: it builds a
//! simulation from configuration, places the configured scene, and runs the
//! paced frame loop until a limit is reached or the circuit goes quiet.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `wireworld-config.yaml`
//! 3. Build the simulation and apply the scene placements
//! 4. Run the frame loop
//! 5. Log the result and print it as JSON

mod error;
mod frame_log;
mod runner;

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;
use wireworld_core::config::SimulationConfig;
use wireworld_core::simulation::Simulation;

use crate::error::EngineError;
use crate::frame_log::FrameLogger;
use crate::runner::RunLimits;

/// Config file looked up in the working directory.
const CONFIG_PATH: &str = "wireworld-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration, scene placement, or the run fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("wireworld-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        screen_width = config.world.screen_width,
        screen_height = config.world.screen_height,
        cell_size = config.world.cell_size,
        frames_per_generation = config.timing.frames_per_generation,
        frame_interval_ms = config.timing.frame_interval_ms,
        "Configuration loaded"
    );

    // 3. Build the simulation and place the scene.
    let mut sim = Simulation::from_config(&config).map_err(EngineError::from)?;

    // 4. Run.
    let limits = RunLimits::from_config(&config);
    let mut callback = FrameLogger::new(config.run.render_every);
    let result = runner::run_simulation(&mut sim, &limits, &mut callback)
        .await
        .map_err(EngineError::from)?;

    // 5. Report.
    runner::log_run_end(&result);
    let summary = serde_json::to_string_pretty(&result).map_err(EngineError::from)?;
    println!("{summary}");

    info!(
        end_reason = ?result.end_reason,
        generations = result.generations,
        "wireworld-engine shutdown complete"
    );
    Ok(())
}

/// Load the simulation configuration from `wireworld-config.yaml`.
///
/// Falls back to defaults when the file does not exist.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok(SimulationConfig::from_file(config_path)?)
    } else {
        info!("Config file not found, using defaults");
        let mut config = SimulationConfig::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }
}
