//! Frame counter and generation cadence.
//!
//! The external driver calls [`GenerationClock::advance`] once per frame
//! while the simulation is running. Every `frames_per_generation` frames the
//! clock reports that a generation is due and the controller steps the grid.
//!
//! # Design Principles
//!
//! - All counters use checked arithmetic (no silent overflow).
//! - The generation number is the source of truth for how many times the
//!   grid has been replaced; the frame counter only drives cadence.

/// Errors that can occur during clock operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// A counter would overflow.
    #[error("generation counter overflow: cannot advance beyond u64::MAX")]
    GenerationOverflow,

    /// The cadence must be at least one frame per generation.
    #[error("invalid cadence: frames_per_generation must be at least 1")]
    InvalidCadence,
}

/// Counts frames and generations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationClock {
    /// Frames since the last generation was due.
    pending_frames: u64,

    /// Frames counted since the clock was created.
    total_frames: u64,

    /// Generations elapsed.
    generation: u64,

    /// Frames between generations.
    frames_per_generation: u64,
}

impl GenerationClock {
    /// Create a clock at frame 0, generation 0.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidCadence`] if `frames_per_generation` is 0.
    pub const fn new(frames_per_generation: u64) -> Result<Self, ClockError> {
        if frames_per_generation == 0 {
            return Err(ClockError::InvalidCadence);
        }
        Ok(Self {
            pending_frames: 0,
            total_frames: 0,
            generation: 0,
            frames_per_generation,
        })
    }

    /// Count one frame. Returns `true` when a generation is due, in which
    /// case the generation counter has already been advanced.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::GenerationOverflow`] if a counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<bool, ClockError> {
        self.total_frames = self
            .total_frames
            .checked_add(1)
            .ok_or(ClockError::GenerationOverflow)?;
        self.pending_frames = self
            .pending_frames
            .checked_add(1)
            .ok_or(ClockError::GenerationOverflow)?;
        if self.pending_frames < self.frames_per_generation {
            return Ok(false);
        }
        self.pending_frames = 0;
        self.record_generation()?;
        Ok(true)
    }

    /// Record a generation stepped outside the frame cadence.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::GenerationOverflow`] if the generation counter
    /// would exceed `u64::MAX`.
    pub fn record_generation(&mut self) -> Result<u64, ClockError> {
        self.generation = self
            .generation
            .checked_add(1)
            .ok_or(ClockError::GenerationOverflow)?;
        Ok(self.generation)
    }

    /// Number of generations elapsed.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of frames counted.
    pub const fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Configured frames between generations.
    pub const fn frames_per_generation(&self) -> u64 {
        self.frames_per_generation
    }

    /// Frames remaining until the next generation is due.
    pub const fn frames_until_generation(&self) -> u64 {
        self.frames_per_generation.saturating_sub(self.pending_frames)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = GenerationClock::new(10).unwrap();
        assert_eq!(clock.generation(), 0);
        assert_eq!(clock.total_frames(), 0);
        assert_eq!(clock.frames_until_generation(), 10);
    }

    #[test]
    fn generation_due_every_n_frames() {
        let mut clock = GenerationClock::new(10).unwrap();
        let due: Vec<u64> = (1..=30_u64)
            .filter(|_| clock.advance().unwrap())
            .collect();
        assert_eq!(due, vec![10, 20, 30]);
        assert_eq!(clock.generation(), 3);
        assert_eq!(clock.total_frames(), 30);
    }

    #[test]
    fn single_frame_cadence_steps_every_frame() {
        let mut clock = GenerationClock::new(1).unwrap();
        assert!(clock.advance().unwrap());
        assert!(clock.advance().unwrap());
        assert_eq!(clock.generation(), 2);
    }

    #[test]
    fn frames_until_generation_counts_down() {
        let mut clock = GenerationClock::new(4).unwrap();
        let _ = clock.advance();
        let _ = clock.advance();
        let _ = clock.advance();
        assert_eq!(clock.frames_until_generation(), 1);
        let _ = clock.advance();
        assert_eq!(clock.frames_until_generation(), 4);
    }

    #[test]
    fn manual_generation_does_not_reset_cadence() {
        let mut clock = GenerationClock::new(3).unwrap();
        let _ = clock.advance();
        assert_eq!(clock.record_generation().unwrap(), 1);
        assert_eq!(clock.frames_until_generation(), 2);
    }

    #[test]
    fn zero_cadence_is_rejected() {
        assert_eq!(GenerationClock::new(0), Err(ClockError::InvalidCadence));
    }
}
