//! Mapping between device pixels and grid cells.
//!
//! The input layer reports cursor positions in pixels; every grid cell is a
//! `cell_size` x `cell_size` square, so the cell under the cursor is the
//! pixel position floor-divided by the cell size.

use wireworld_types::{Cell, SimulationBounds};

/// Errors that can occur when building a viewport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    /// Cells must be at least one pixel wide.
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,
}

/// A screen of `screen_width` x `screen_height` pixels divided into square
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Screen width in pixels.
    screen_width: u32,
    /// Screen height in pixels.
    screen_height: u32,
    /// Side of one cell in pixels (never 0).
    cell_size: u32,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::ZeroCellSize`] if `cell_size` is 0.
    pub const fn new(
        screen_width: u32,
        screen_height: u32,
        cell_size: u32,
    ) -> Result<Self, ViewportError> {
        if cell_size == 0 {
            return Err(ViewportError::ZeroCellSize);
        }
        Ok(Self {
            screen_width,
            screen_height,
            cell_size,
        })
    }

    /// Side of one cell in pixels.
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The simulation rectangle covered by the screen. Partial cells at the
    /// right and bottom edges are not included.
    pub fn bounds(&self) -> SimulationBounds {
        SimulationBounds::new(
            self.screen_width.checked_div(self.cell_size).unwrap_or(0),
            self.screen_height.checked_div(self.cell_size).unwrap_or(0),
        )
    }

    /// The cell under pixel `(px, py)`.
    pub fn cell_at(&self, px: i64, py: i64) -> Cell {
        let size = i64::from(self.cell_size);
        Cell::new(
            px.checked_div_euclid(size).unwrap_or(px),
            py.checked_div_euclid(size).unwrap_or(py),
        )
    }

    /// Top-left pixel of `cell`, or `None` if it cannot be represented.
    pub fn pixel_origin(&self, cell: Cell) -> Option<(i64, i64)> {
        let size = i64::from(self.cell_size);
        Some((cell.x.checked_mul(size)?, cell.y.checked_mul(size)?))
    }
}
