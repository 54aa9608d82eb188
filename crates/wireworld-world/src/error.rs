//! Error types for the `wireworld-world` crate.
//!
//! The kernel operations (lookup, counting, stamping) are total and never
//! fail. Errors only arise at the edges: resolving a pattern by name and
//! igniting a pulse on a template.

use wireworld_types::Cell;

use crate::pattern::PatternKind;

/// Errors that can occur when resolving or activating templates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// No template is registered under the given name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// The template is not a closed ring, so a pulse has no direction.
    #[error("pattern {0} is not a ring and cannot be ignited")]
    NotARing(PatternKind),

    /// The requested ring position does not exist.
    #[error("ring position {position} out of range for {pattern} (length {length})")]
    RingPositionOutOfRange {
        /// The ring template.
        pattern: PatternKind,
        /// The requested position.
        position: usize,
        /// Number of cells in the ring.
        length: usize,
    },

    /// A template cell cannot be represented relative to the anchor.
    #[error("coordinate overflow placing {pattern} at {anchor}")]
    CoordinateOverflow {
        /// The template being placed.
        pattern: PatternKind,
        /// The anchor that pushed it out of range.
        anchor: Cell,
    },
}
