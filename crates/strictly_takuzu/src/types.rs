//! Core domain types for takuzu.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// State of a single grid cell.
///
/// The puzzle is played over two symbols plus the empty state, cycled by
/// repeated interaction: `Empty → First → Second → Empty`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum CellState {
    /// No symbol yet.
    #[default]
    Empty,
    /// The first symbol.
    First,
    /// The second symbol.
    Second,
}

impl CellState {
    /// Returns the successor state in the cycle.
    ///
    /// The transition is total: every state has a successor and there is no
    /// terminal state.
    pub fn next(self) -> Self {
        match self {
            CellState::Empty => CellState::First,
            CellState::First => CellState::Second,
            CellState::Second => CellState::Empty,
        }
    }

    /// Display tag of the state (0, 1, or 2) — the validator's alphabet.
    pub fn tag(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::First => 1,
            CellState::Second => 2,
        }
    }

    /// Parses a display tag back into a state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] for tags outside `{0, 1, 2}`.
    pub fn from_tag(tag: u8) -> Result<Self, Error> {
        match tag {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::First),
            2 => Ok(CellState::Second),
            other => Err(Error::UnknownState(other)),
        }
    }

    /// Fill color a renderer should use for this state.
    pub fn color(self) -> &'static str {
        match self {
            CellState::Empty => "#ADADAD",
            CellState::First => "#34639D",
            CellState::Second => "#8D1E20",
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Initial fill of a freshly constructed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillMode {
    /// Every cell's state is drawn uniformly from the three states.
    Random,
    /// Every cell starts empty.
    Blank,
}

/// Whether pre-filled cells become locked clues.
///
/// The choice is part of the grid configuration: a puzzle treats non-empty
/// initial cells as given clues, a sandbox leaves everything editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockPolicy {
    /// Non-empty initial cells lock at construction.
    Clues,
    /// No cell locks at construction.
    Sandbox,
}
