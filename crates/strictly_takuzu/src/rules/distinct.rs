//! Uniqueness rule: no two rows and no two columns may be identical.

use tracing::instrument;

use super::Line;

/// Finds the first pair of identical lines.
///
/// Every unordered pair of rows is compared, then every unordered pair of
/// columns. Cubic in the side length, which stays trivial at playable sizes.
#[instrument(skip(snapshot))]
pub fn find_duplicate(snapshot: &[Vec<u8>]) -> Option<(Line, Line)> {
    let n = snapshot.len();
    for a in 0..n {
        for b in (a + 1)..n {
            if snapshot[a] == snapshot[b] {
                return Some((Line::Row(a), Line::Row(b)));
            }
        }
    }
    for a in 0..n {
        for b in (a + 1)..n {
            if (0..n).all(|row| snapshot[row][a] == snapshot[row][b]) {
                return Some((Line::Column(a), Line::Column(b)));
            }
        }
    }
    None
}
