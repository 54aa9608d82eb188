//! Configuration loading and typed config structures for the Wireworld
//! simulation.
//!
//! The configuration lives in `wireworld-config.yaml`. Every section and
//! field has a default matching the reference board: a 900 x 600 pixel
//! screen of 15 pixel cells, stepped once every 10 frames.

use std::path::Path;

use serde::Deserialize;
use wireworld_types::Cell;
use wireworld_world::PatternKind;

use crate::command::Command;
use crate::viewport::{Viewport, ViewportError};

/// Environment variable overriding `run.max_generations`.
pub const MAX_GENERATIONS_ENV: &str = "WIREWORLD_MAX_GENERATIONS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an unusable simulation.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

impl From<ViewportError> for ConfigError {
    fn from(source: ViewportError) -> Self {
        Self::Invalid {
            reason: source.to_string(),
        }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Screen and cell geometry.
    #[serde(default)]
    pub world: WorldConfig,

    /// Frame cadence.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Headless run limits.
    #[serde(default)]
    pub run: RunConfig,

    /// Initial scene, applied in order before the first frame.
    #[serde(default)]
    pub placements: Vec<Placement>,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `WIREWORLD_MAX_GENERATIONS` overrides `run.max_generations`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override is not a valid value.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup(MAX_GENERATIONS_ENV) {
            self.run.max_generations =
                val.trim().parse().map_err(|err| ConfigError::Invalid {
                    reason: format!("{MAX_GENERATIONS_ENV}={val}: {err}"),
                })?;
        }
        Ok(())
    }

    /// Check the values that the simulation cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.viewport()?;
        if self.timing.frames_per_generation == 0 {
            return Err(ConfigError::Invalid {
                reason: "timing.frames_per_generation must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

/// Screen and cell geometry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Screen width in pixels.
    #[serde(default = "default_screen_width")]
    pub screen_width: u32,

    /// Screen height in pixels.
    #[serde(default = "default_screen_height")]
    pub screen_height: u32,

    /// Side of one cell in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
}

impl WorldConfig {
    /// Build the viewport described by this section.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ZeroCellSize`] if `cell_size` is 0.
    pub const fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.screen_width, self.screen_height, self.cell_size)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: default_screen_width(),
            screen_height: default_screen_height(),
            cell_size: default_cell_size(),
        }
    }
}

/// Frame cadence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimingConfig {
    /// Frames between generations while running.
    #[serde(default = "default_frames_per_generation")]
    pub frames_per_generation: u64,

    /// Real-time milliseconds between frames in the headless engine.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frames_per_generation: default_frames_per_generation(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

/// Headless run limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Whether the simulation starts running (as opposed to paused).
    #[serde(default = "default_true")]
    pub start_running: bool,

    /// Stop after this many generations (0 = unlimited).
    #[serde(default = "default_max_generations")]
    pub max_generations: u64,

    /// Stop after this many frames (0 = unlimited).
    #[serde(default)]
    pub max_frames: u64,

    /// Stop once no electron heads or tails remain.
    #[serde(default = "default_true")]
    pub stop_when_quiescent: bool,

    /// Log a text frame every this many generations (0 = never).
    #[serde(default)]
    pub render_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_running: true,
            max_generations: default_max_generations(),
            max_frames: 0,
            stop_when_quiescent: true,
            render_every: 0,
        }
    }
}

/// One element of the initial scene.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Stamp a template, optionally igniting a pulse on it.
    Pattern {
        /// Template to stamp.
        pattern: PatternKind,
        /// Anchor column.
        x: i64,
        /// Anchor row.
        y: i64,
        /// Ring position to ignite after stamping.
        #[serde(default)]
        ignite: Option<usize>,
    },
    /// Click a single cell through the editor cycle.
    Cell {
        /// Column.
        x: i64,
        /// Row.
        y: i64,
        /// Number of editor clicks (1 = conductor, 2 = electron head).
        #[serde(default = "default_clicks")]
        clicks: u8,
    },
}

impl Placement {
    /// The commands that reproduce this placement.
    pub fn commands(&self) -> Vec<Command> {
        match *self {
            Self::Pattern {
                pattern,
                x,
                y,
                ignite,
            } => {
                let anchor = Cell::new(x, y);
                let mut commands = vec![Command::Stamp { pattern, anchor }];
                if let Some(position) = ignite {
                    commands.push(Command::Ignite {
                        pattern,
                        anchor,
                        position,
                    });
                }
                commands
            }
            Self::Cell { x, y, clicks } => {
                let cell = Cell::new(x, y);
                (0..clicks).map(|_| Command::click(cell)).collect()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_screen_width() -> u32 {
    900
}

const fn default_screen_height() -> u32 {
    600
}

const fn default_cell_size() -> u32 {
    15
}

const fn default_frames_per_generation() -> u64 {
    10
}

const fn default_frame_interval_ms() -> u64 {
    16
}

const fn default_max_generations() -> u64 {
    500
}

const fn default_clicks() -> u8 {
    1
}

const fn default_true() -> bool {
    true
}
