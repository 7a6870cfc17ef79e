//! Game rules for takuzu.
//!
//! This module contains pure functions for evaluating a realized grid
//! snapshot against the four takuzu rules. Rules are separated from cell
//! storage so verification never touches mutable state: the only input is
//! the square tag matrix produced by [`Grid::snapshot`](crate::Grid::snapshot).

pub mod balance;
pub mod distinct;
pub mod filled;
pub mod runs;

pub use balance::find_unbalanced;
pub use distinct::find_duplicate;
pub use filled::is_filled;
pub use runs::find_triple;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A row or column of the grid, identified by its index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Line {
    /// Row with the given index.
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index.
    #[display("column {}", _0)]
    Column(usize),
}

/// A rule violation, carrying enough context to point at the offending line
/// or pair of lines.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Violation {
    /// At least one cell is still empty.
    #[display("grid is not completely filled")]
    IncompleteGrid,
    /// Three or more consecutive cells in a line share a symbol.
    #[display("three consecutive cells share a symbol in {}", _0)]
    TripleRun(Line),
    /// A line holds unequal counts of the two symbols.
    #[display("symbol counts are unequal in {}", _0)]
    Unbalanced(Line),
    /// Two lines are identical.
    #[display("{} and {} are identical", _0, _1)]
    DuplicateLine(Line, Line),
}

/// Verdict of one verification pass over a snapshot.
///
/// Transient by design: produced, inspected (typically to drive a solved
/// indicator), and discarded. An invalid grid is a normal outcome, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    valid: bool,
    reason: Option<Violation>,
}

impl ValidationResult {
    fn solved() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn broken(reason: Violation) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }

    /// Whether the snapshot satisfies all four rules.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// The first violation found, if any.
    pub fn reason(&self) -> Option<&Violation> {
        self.reason.as_ref()
    }
}

/// Decides whether a snapshot is a solved takuzu grid.
///
/// The snapshot must be the square matrix [`Grid::snapshot`](crate::Grid::snapshot)
/// produces. All four rule families must hold:
///
/// 1. every cell carries a symbol,
/// 2. no line contains three consecutive equal symbols,
/// 3. every line holds the two symbols in equal counts,
/// 4. no two rows and no two columns are identical.
///
/// Families are evaluated in that order and the verdict reports the first
/// failing family, rows before columns within each.
#[instrument(skip(snapshot))]
pub fn verify(snapshot: &[Vec<u8>]) -> ValidationResult {
    let violation = if !filled::is_filled(snapshot) {
        Some(Violation::IncompleteGrid)
    } else if let Some(line) = runs::find_triple(snapshot) {
        Some(Violation::TripleRun(line))
    } else if let Some(line) = balance::find_unbalanced(snapshot) {
        Some(Violation::Unbalanced(line))
    } else if let Some((a, b)) = distinct::find_duplicate(snapshot) {
        Some(Violation::DuplicateLine(a, b))
    } else {
        None
    };

    match violation {
        Some(violation) => {
            debug!(%violation, "snapshot rejected");
            ValidationResult::broken(violation)
        }
        None => ValidationResult::solved(),
    }
}
