//! Board geometry configuration.
//!
//! The rendering surface the grid lives on is described by an explicit value
//! passed into grid construction — one fresh `Layout` per new-game action,
//! never shared mutable state.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Geometry of the square board area a grid is laid out on.
///
/// Cells are squares separated by a uniform margin; `n` cells plus their
/// margins span the full board width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    board_width: f64,
    margin: f64,
}

impl Layout {
    /// Margin between cells used by the reference rendering surface.
    pub const DEFAULT_MARGIN: f64 = 5.0;

    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when either measure is non-finite.
    pub fn new(board_width: f64, margin: f64) -> Result<Self, Error> {
        if !board_width.is_finite() {
            return Err(Error::InvalidArgument("board width must be finite"));
        }
        if !margin.is_finite() {
            return Err(Error::InvalidArgument("cell margin must be finite"));
        }
        Ok(Self {
            board_width,
            margin,
        })
    }

    /// Total width of the board area.
    pub fn board_width(&self) -> f64 {
        self.board_width
    }

    /// Margin on each side of a cell.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Side length of one cell in an `n` by `n` grid.
    pub fn cell_size(&self, n: usize) -> f64 {
        self.board_width / n as f64 - 2.0 * self.margin
    }

    /// Top-left corner of the cell at `(row, col)` in an `n` by `n` grid.
    ///
    /// Rows advance down the y axis, columns along the x axis.
    pub fn origin(&self, row: usize, col: usize, n: usize) -> (f64, f64) {
        let cell = self.cell_size(n);
        let place = |i: usize| i as f64 * cell + 2.0 * i as f64 * self.margin + self.margin;
        (place(col), place(row))
    }
}
