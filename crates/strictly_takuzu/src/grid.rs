//! The N-by-N grid of tri-state cells.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cell::Cell;
use crate::error::Error;
use crate::layout::Layout;
use crate::types::{CellState, FillMode, LockPolicy};

/// Exported grid state: one display tag per cell, row-major.
///
/// The snapshot is the only input the validator sees, so verification never
/// observes a grid mid-mutation.
pub type Snapshot = Vec<Vec<u8>>;

/// Construction parameters for a grid.
///
/// A fresh config accompanies every new-game action; changing size or fill
/// mode means building a new grid from a new config, not mutating the old
/// one in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the grid, in cells.
    pub size: usize,
    /// Initial fill.
    pub fill: FillMode,
    /// Whether non-empty initial cells become locked clues.
    pub locking: LockPolicy,
    /// Board geometry.
    pub layout: Layout,
}

impl GridConfig {
    /// Creates a config.
    pub fn new(size: usize, fill: FillMode, locking: LockPolicy, layout: Layout) -> Self {
        Self {
            size,
            fill,
            locking,
            layout,
        }
    }
}

/// An N-by-N takuzu grid.
///
/// The grid exclusively owns its cells; callers mutate them only through
/// grid-mediated operations and read them back as a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from the given config, drawing any random initial
    /// states from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the size is odd or below 4 — the
    /// balance rule cannot be satisfied on smaller boards.
    #[instrument]
    pub fn new(config: &GridConfig) -> Result<Self, Error> {
        Self::new_with_rng(config, &mut rand::thread_rng())
    }

    /// Builds a grid using the supplied random number generator.
    ///
    /// Random fill draws each cell's tag uniformly and independently from
    /// `{0, 1, 2}`. Nothing guarantees the result is solvable; an unsolvable
    /// board can reach play, matching the original game.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the size is odd or below 4.
    #[instrument(skip(rng))]
    pub fn new_with_rng<R: Rng>(config: &GridConfig, rng: &mut R) -> Result<Self, Error> {
        if config.size % 2 != 0 || config.size < 4 {
            return Err(Error::InvalidSize(config.size));
        }
        let cell_size = config.layout.cell_size(config.size);
        let mut cells = Vec::with_capacity(config.size);
        for row in 0..config.size {
            let mut line = Vec::with_capacity(config.size);
            for col in 0..config.size {
                let (x, y) = config.layout.origin(row, col, config.size);
                let tag = match config.fill {
                    FillMode::Blank => None,
                    FillMode::Random => Some(rng.gen_range(0..3u8)),
                };
                line.push(Cell::new(x, y, cell_size, tag, config.locking)?);
            }
            cells.push(line);
        }
        Ok(Self {
            size: config.size,
            cells,
        })
    }

    /// Side length of the grid, in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `(row, col)`, if in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|line| line.get(col))
    }

    /// Finds the cell containing the point `(x, y)`.
    ///
    /// Linear scan over all cells; fine for the handful of cells a playable
    /// grid holds. Points on cell edges or in the margins belong to no cell.
    #[instrument(skip(self))]
    pub fn locate(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if cell.contains(x, y) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Toggles the cell at `(row, col)` and returns its new state.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::BlockedCell`] from locked cells unchanged and
    /// returns [`Error::InvalidArgument`] for out-of-range indices. The grid
    /// is untouched on failure.
    #[instrument(skip(self))]
    pub fn toggle_at(&mut self, row: usize, col: usize) -> Result<CellState, Error> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|line| line.get_mut(col))
            .ok_or(Error::InvalidArgument("cell index out of range"))?;
        cell.toggle()
    }

    /// Plays at a pointer position: locates the cell under `(x, y)` and
    /// toggles it.
    ///
    /// Returns `Ok(None)` when the point hits no cell — a miss is a normal
    /// interaction outcome, not an error.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::BlockedCell`] when the located cell is locked.
    #[instrument(skip(self))]
    pub fn play(&mut self, x: f64, y: f64) -> Result<Option<CellState>, Error> {
        match self.locate(x, y) {
            Some((row, col)) => self.toggle_at(row, col).map(Some),
            None => Ok(None),
        }
    }

    /// Exports the current state tags, row-major.
    pub fn snapshot(&self) -> Snapshot {
        self.cells
            .iter()
            .map(|line| line.iter().map(Cell::tag).collect())
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.cells {
            write!(f, "[")?;
            for (col, cell) in line.iter().enumerate() {
                if col != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", cell.tag())?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
