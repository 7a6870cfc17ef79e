//! Balance rule: every line holds the two symbols in equal counts.

use tracing::instrument;

use super::Line;

/// Finds the first line whose symbol counts differ.
///
/// Rows are checked before columns. On a completely filled grid, a balanced
/// line holds exactly half of each symbol.
#[instrument(skip(snapshot))]
pub fn find_unbalanced(snapshot: &[Vec<u8>]) -> Option<Line> {
    let n = snapshot.len();
    for (index, row) in snapshot.iter().enumerate() {
        if !balanced(row.iter().copied()) {
            return Some(Line::Row(index));
        }
    }
    for col in 0..n {
        if !balanced(snapshot.iter().map(|row| row[col])) {
            return Some(Line::Column(col));
        }
    }
    None
}

fn balanced(line: impl Iterator<Item = u8>) -> bool {
    let mut first = 0usize;
    let mut second = 0usize;
    for tag in line {
        match tag {
            1 => first += 1,
            2 => second += 1,
            _ => {}
        }
    }
    first == second
}
