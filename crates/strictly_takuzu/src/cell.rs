//! A single addressable slot in the puzzle grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Error;
use crate::types::{CellState, LockPolicy};

/// A square slot in the grid: geometry, current state, lock flag.
///
/// Cells are created by the [`Grid`](crate::Grid) at construction time and
/// mutated only through [`Cell::toggle`]. A locked cell is a given clue and
/// never changes state again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    x: f64,
    y: f64,
    size: f64,
    state: CellState,
    locked: bool,
}

impl Cell {
    /// Creates a new cell.
    ///
    /// `state` is a display tag in `{0, 1, 2}`; `None` defaults to empty.
    /// Whether a non-empty initial state locks the cell is decided by
    /// `policy`, never hard-coded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a coordinate or the size is
    /// non-finite, and [`Error::UnknownState`] for a tag outside `{0, 1, 2}`.
    #[instrument]
    pub fn new(
        x: f64,
        y: f64,
        size: f64,
        state: Option<u8>,
        policy: LockPolicy,
    ) -> Result<Self, Error> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidArgument("cell position must be finite"));
        }
        if !size.is_finite() {
            return Err(Error::InvalidArgument("cell size must be finite"));
        }
        let state = match state {
            None => CellState::Empty,
            Some(tag) => CellState::from_tag(tag)?,
        };
        let locked = match policy {
            LockPolicy::Clues => state != CellState::Empty,
            LockPolicy::Sandbox => false,
        };
        Ok(Self {
            x,
            y,
            size,
            state,
            locked,
        })
    }

    /// Advances the cell to its next state and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockedCell`] if the cell is locked; the state is
    /// left unchanged.
    #[instrument(skip(self), fields(state = ?self.state, locked = self.locked))]
    pub fn toggle(&mut self) -> Result<CellState, Error> {
        if self.locked {
            return Err(Error::BlockedCell);
        }
        self.state = self.state.next();
        Ok(self.state)
    }

    /// Checks whether `(x, y)` lies strictly inside the cell's square.
    ///
    /// All four bounds are exclusive; a point on an edge belongs to no cell.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.x && x < self.x + self.size && y > self.y && y < self.y + self.size
    }

    /// Locks the cell in its current state. Idempotent.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Current state.
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Display tag of the current state.
    pub fn tag(&self) -> u8 {
        self.state.tag()
    }

    /// Whether the cell is locked.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// X coordinate of the top-left corner.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate of the top-left corner.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Side length of the square.
    pub fn size(&self) -> f64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked(state: Option<u8>) -> Cell {
        Cell::new(10.0, 10.0, 5.0, state, LockPolicy::Sandbox).unwrap()
    }

    #[test]
    fn test_toggle_cycles_back_to_start() {
        for tag in 0..3 {
            let mut cell = unlocked(Some(tag));
            let start = cell.state();
            for _ in 0..3 {
                cell.toggle().unwrap();
            }
            assert_eq!(cell.state(), start);
        }
    }

    #[test]
    fn test_clue_policy_locks_non_empty_states() {
        let empty = Cell::new(0.0, 0.0, 5.0, Some(0), LockPolicy::Clues).unwrap();
        assert!(!empty.locked());
        for tag in [1, 2] {
            let clue = Cell::new(0.0, 0.0, 5.0, Some(tag), LockPolicy::Clues).unwrap();
            assert!(clue.locked());
        }
    }

    #[test]
    fn test_sandbox_policy_never_locks() {
        for tag in [0, 1, 2] {
            let cell = Cell::new(0.0, 0.0, 5.0, Some(tag), LockPolicy::Sandbox).unwrap();
            assert!(!cell.locked());
        }
    }

    #[test]
    fn test_locked_cell_rejects_every_toggle() {
        let mut cell = Cell::new(0.0, 0.0, 5.0, Some(1), LockPolicy::Clues).unwrap();
        for _ in 0..5 {
            assert_eq!(cell.toggle(), Err(Error::BlockedCell));
            assert_eq!(cell.tag(), 1);
        }
    }

    #[test]
    fn test_lock_is_idempotent() {
        let mut cell = unlocked(None);
        cell.lock();
        cell.lock();
        assert!(cell.locked());
        assert_eq!(cell.toggle(), Err(Error::BlockedCell));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(
            Cell::new(0.0, 0.0, 5.0, Some(3), LockPolicy::Clues),
            Err(Error::UnknownState(3))
        );
    }

    #[test]
    fn test_non_finite_geometry_rejected() {
        assert!(matches!(
            Cell::new(f64::NAN, 0.0, 5.0, None, LockPolicy::Clues),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Cell::new(0.0, 0.0, f64::INFINITY, None, LockPolicy::Clues),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_state_defaults_to_empty() {
        let cell = Cell::new(0.0, 0.0, 5.0, None, LockPolicy::Clues).unwrap();
        assert_eq!(cell.state(), CellState::Empty);
        assert!(!cell.locked());
    }

    #[test]
    fn test_contains_is_exclusive_on_all_bounds() {
        let cell = unlocked(None); // square from (10, 10) to (15, 15)
        assert!(cell.contains(12.5, 12.5));

        // Boundary points are outside.
        assert!(!cell.contains(10.0, 12.5));
        assert!(!cell.contains(15.0, 12.5));
        assert!(!cell.contains(12.5, 10.0));
        assert!(!cell.contains(12.5, 15.0));
        assert!(!cell.contains(10.0, 10.0));
        assert!(!cell.contains(15.0, 15.0));

        // Strictly outside.
        assert!(!cell.contains(9.0, 12.5));
        assert!(!cell.contains(12.5, 16.0));
    }
}
