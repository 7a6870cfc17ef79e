//! Run-length rule: no three consecutive cells may share a symbol.

use tracing::instrument;

use super::Line;

/// Longest run of equal tags a line may contain.
const MAX_RUN: usize = 2;

/// Finds the first line containing three or more consecutive equal tags.
///
/// Rows are scanned before columns. Each scan tracks the current run value
/// and length and stops as soon as a run reaches three.
#[instrument(skip(snapshot))]
pub fn find_triple(snapshot: &[Vec<u8>]) -> Option<Line> {
    let n = snapshot.len();
    for (index, row) in snapshot.iter().enumerate() {
        if has_triple(row.iter().copied()) {
            return Some(Line::Row(index));
        }
    }
    for col in 0..n {
        if has_triple(snapshot.iter().map(|row| row[col])) {
            return Some(Line::Column(col));
        }
    }
    None
}

fn has_triple(line: impl Iterator<Item = u8>) -> bool {
    let mut current = None;
    let mut length = 0;
    for tag in line {
        if Some(tag) == current {
            length += 1;
            if length > MAX_RUN {
                return true;
            }
        } else {
            current = Some(tag);
            length = 1;
        }
    }
    false
}
