//! Strictly Takuzu - pure takuzu (binairo) puzzle logic
//!
//! A square grid of tri-state cells, cycled by repeated interaction and
//! checked against four simultaneous rules to decide solved/unsolved.
//!
//! # Architecture
//!
//! - **CellState**: the closed tri-state value and its cyclic transition
//! - **Cell**: one addressable grid slot - geometry, state, lock flag
//! - **Grid**: the N-by-N owner of all cells - construction, coordinate
//!   lookup, toggling, snapshot export
//! - **rules**: pure validation over a realized snapshot
//!
//! Rendering, hit-testing against a real pointer device, and puzzle
//! generation with a solvability guarantee live outside this crate.
//!
//! # Example
//!
//! ```
//! use strictly_takuzu::{rules, FillMode, Grid, GridConfig, Layout, LockPolicy};
//!
//! # fn main() -> Result<(), strictly_takuzu::Error> {
//! let layout = Layout::new(360.0, Layout::DEFAULT_MARGIN)?;
//! let config = GridConfig::new(4, FillMode::Blank, LockPolicy::Clues, layout);
//! let mut grid = Grid::new(&config)?;
//!
//! // Cycle the top-left cell: empty -> first symbol.
//! grid.toggle_at(0, 0)?;
//!
//! let verdict = rules::verify(&grid.snapshot());
//! assert!(!verdict.valid()); // most of the grid is still empty
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod error;
mod grid;
#[cfg(kani)]
mod kani_support;
mod layout;
pub mod rules;
mod types;

pub use cell::Cell;
pub use error::Error;
pub use grid::{Grid, GridConfig, Snapshot};
pub use layout::Layout;
pub use rules::{verify, Line, ValidationResult, Violation};
pub use types::{CellState, FillMode, LockPolicy};
