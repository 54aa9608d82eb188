//! Edit and control commands issued by the input layer.
//!
//! The input layer translates device events into [`Command`] values and
//! hands them to [`Simulation::apply`]. Commands are accepted whether the
//! simulation is running or paused.
//!
//! [`Simulation::apply`]: crate::simulation::Simulation::apply

use serde::{Deserialize, Serialize};
use wireworld_types::Cell;
use wireworld_world::PatternKind;

/// Key that toggles the running flag.
pub const TOGGLE_KEY: char = ' ';

/// Key that clears the grid (backspace).
pub const CLEAR_KEY: char = '\u{8}';

/// A single edit or control operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Advance one cell through the editor cycle.
    Cycle {
        /// Cell to edit.
        cell: Cell,
    },
    /// Stamp a template as conductor wire.
    Stamp {
        /// Template to place.
        pattern: PatternKind,
        /// Anchor cell of the template.
        anchor: Cell,
    },
    /// Start a pulse on a stamped ring template.
    Ignite {
        /// Ring template.
        pattern: PatternKind,
        /// Anchor the ring was stamped at.
        anchor: Cell,
        /// Ring position that receives the head.
        position: usize,
    },
    /// Pause a running simulation or resume a paused one.
    ToggleRunning,
    /// Reset the grid to empty.
    Clear,
}

impl Command {
    /// Translate a key press with the cursor over `cursor` into a command.
    ///
    /// Space toggles running, backspace clears, and the template keys
    /// (`t d o x n`) stamp at the cursor. Other keys map to nothing.
    pub fn from_key(key: char, cursor: Cell) -> Option<Self> {
        match key {
            TOGGLE_KEY => Some(Self::ToggleRunning),
            CLEAR_KEY => Some(Self::Clear),
            other => PatternKind::from_key(other).map(|pattern| Self::Stamp {
                pattern,
                anchor: cursor,
            }),
        }
    }

    /// A mouse click over `cell`.
    pub const fn click(cell: Cell) -> Self {
        Self::Cycle { cell }
    }
}
