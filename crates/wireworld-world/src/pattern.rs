//! Logic-gate templates stamped onto the grid as conductor wire.
//!
//! Every template is a fixed list of offsets from an anchor cell. Stamping
//! writes [`CellState::Conductor`] at each offset, overwriting whatever was
//! there, and never removes cells. Stamping the same template at the same
//! anchor twice leaves the grid unchanged the second time.
//!
//! Templates never create electrons. A ring template such as the timer only
//! oscillates once it is ignited with [`PatternKind::ignite`], which places
//! a head and its trailing tail on adjacent ring cells.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wireworld_types::{Cell, CellOffset, CellState};

use crate::error::WorldError;
use crate::grid::Grid;

/// Closed 10-cell ring. Offsets are listed in ring order.
const TIMER: [CellOffset; 10] = [
    CellOffset::new(0, 0),
    CellOffset::new(1, 1),
    CellOffset::new(2, 1),
    CellOffset::new(3, 1),
    CellOffset::new(4, 1),
    CellOffset::new(5, 0),
    CellOffset::new(4, -1),
    CellOffset::new(3, -1),
    CellOffset::new(2, -1),
    CellOffset::new(1, -1),
];

/// Passes signals entering at the anchor, blocks signals arriving from the
/// far end.
const DIODE: [CellOffset; 7] = [
    CellOffset::new(0, 0),
    CellOffset::new(1, 0),
    CellOffset::new(1, 1),
    CellOffset::new(1, -1),
    CellOffset::new(3, 0),
    CellOffset::new(2, -1),
    CellOffset::new(2, 1),
];

/// Inputs at `(0, -2)` and `(0, 2)`, output leaves from `(2, 0)`.
const OR: [CellOffset; 7] = [
    CellOffset::new(0, 0),
    CellOffset::new(0, 2),
    CellOffset::new(0, -2),
    CellOffset::new(1, 0),
    CellOffset::new(1, -1),
    CellOffset::new(1, 1),
    CellOffset::new(2, 0),
];

/// Inputs at `(0, 0)` and `(0, -6)`, output leaves from `(3, -3)`.
const XOR: [CellOffset; 14] = [
    CellOffset::new(0, 0),
    CellOffset::new(0, -2),
    CellOffset::new(0, -3),
    CellOffset::new(0, -4),
    CellOffset::new(0, -6),
    CellOffset::new(1, -1),
    CellOffset::new(1, -2),
    CellOffset::new(1, -4),
    CellOffset::new(1, -5),
    CellOffset::new(2, -2),
    CellOffset::new(2, -4),
    CellOffset::new(3, -2),
    CellOffset::new(3, -3),
    CellOffset::new(3, -4),
];

const NOT: [CellOffset; 15] = [
    CellOffset::new(0, 0),
    CellOffset::new(1, 0),
    CellOffset::new(2, -1),
    CellOffset::new(2, 2),
    CellOffset::new(2, 3),
    CellOffset::new(3, 1),
    CellOffset::new(3, -1),
    CellOffset::new(3, 3),
    CellOffset::new(4, 0),
    CellOffset::new(4, 1),
    CellOffset::new(4, 2),
    CellOffset::new(4, 3),
    CellOffset::new(5, 1),
    CellOffset::new(5, 2),
    CellOffset::new(6, 0),
];

/// A named circuit template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Clock: a closed ring that emits a pulse once per lap.
    #[serde(alias = "clock")]
    Timer,
    /// One-way signal gate.
    Diode,
    /// OR gate.
    Or,
    /// Exclusive-OR gate.
    Xor,
    /// NOT gate.
    Not,
}

impl PatternKind {
    /// Every template, in key-binding order.
    pub const ALL: [Self; 5] = [Self::Timer, Self::Diode, Self::Or, Self::Xor, Self::Not];

    /// The template's offsets relative to its anchor.
    pub const fn offsets(self) -> &'static [CellOffset] {
        match self {
            Self::Timer => &TIMER,
            Self::Diode => &DIODE,
            Self::Or => &OR,
            Self::Xor => &XOR,
            Self::Not => &NOT,
        }
    }

    /// Number of cells the template writes.
    pub const fn len(self) -> usize {
        self.offsets().len()
    }

    /// Templates always contain at least one cell.
    pub const fn is_empty(self) -> bool {
        self.offsets().is_empty()
    }

    /// Whether the offsets form a closed ring in listed order.
    pub const fn is_ring(self) -> bool {
        matches!(self, Self::Timer)
    }

    /// Lowercase name, as accepted by [`str::parse`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Timer => "timer",
            Self::Diode => "diode",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Not => "not",
        }
    }

    /// The key that places this template in the interactive editor.
    pub const fn key(self) -> char {
        match self {
            Self::Timer => 't',
            Self::Diode => 'd',
            Self::Or => 'o',
            Self::Xor => 'x',
            Self::Not => 'n',
        }
    }

    /// Resolve a template from its editor key (case-insensitive).
    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Absolute cells covered by the template anchored at `anchor`.
    ///
    /// Offsets that overflow the coordinate range are skipped.
    pub fn cells(self, anchor: Cell) -> impl Iterator<Item = Cell> {
        self.offsets()
            .iter()
            .filter_map(move |offset| anchor.offset(*offset))
    }

    /// Write the template as conductor wire at `anchor`.
    ///
    /// Existing cells under the template are overwritten; cells elsewhere are
    /// untouched. Returns the number of cells written.
    pub fn stamp(self, grid: &mut Grid, anchor: Cell) -> usize {
        let mut written: usize = 0;
        for cell in self.cells(anchor) {
            grid.set(cell, CellState::Conductor);
            written = written.saturating_add(1);
        }
        debug!(pattern = %self, anchor = %anchor, written, "Pattern stamped");
        written
    }

    /// Start a pulse on a ring template anchored at `anchor`.
    ///
    /// Writes an electron head at ring position `position` and an electron
    /// tail at the position before it, so the pulse travels toward
    /// `position + 1`. Returns the `(head, tail)` cells.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NotARing`] for non-ring templates,
    /// [`WorldError::RingPositionOutOfRange`] if `position` is not on the
    /// ring, and [`WorldError::CoordinateOverflow`] if the ring cannot be
    /// placed at `anchor`.
    pub fn ignite(
        self,
        grid: &mut Grid,
        anchor: Cell,
        position: usize,
    ) -> Result<(Cell, Cell), WorldError> {
        if !self.is_ring() {
            return Err(WorldError::NotARing(self));
        }
        let ring = self.offsets();
        let out_of_range = WorldError::RingPositionOutOfRange {
            pattern: self,
            position,
            length: ring.len(),
        };
        let head_offset = ring.get(position).ok_or_else(|| out_of_range.clone())?;
        let tail_index = position
            .checked_sub(1)
            .or_else(|| ring.len().checked_sub(1))
            .ok_or_else(|| out_of_range.clone())?;
        let tail_offset = ring.get(tail_index).ok_or(out_of_range)?;

        let overflow = || WorldError::CoordinateOverflow {
            pattern: self,
            anchor,
        };
        let head = anchor.offset(*head_offset).ok_or_else(overflow)?;
        let tail = anchor.offset(*tail_offset).ok_or_else(overflow)?;

        grid.set(head, CellState::ElectronHead);
        grid.set(tail, CellState::ElectronTail);
        debug!(pattern = %self, anchor = %anchor, head = %head, tail = %tail, "Pulse ignited");
        Ok((head, tail))
    }
}

impl core::str::FromStr for PatternKind {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "timer" | "clock" => Ok(Self::Timer),
            "diode" => Ok(Self::Diode),
            "or" => Ok(Self::Or),
            "xor" => Ok(Self::Xor),
            "not" => Ok(Self::Not),
            other => Err(WorldError::UnknownPattern(other.to_owned())),
        }
    }
}

impl core::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
