//! Completeness rule: every cell must carry a symbol.

use tracing::instrument;

/// Checks that no cell in the snapshot is still empty.
#[instrument(skip(snapshot))]
pub fn is_filled(snapshot: &[Vec<u8>]) -> bool {
    snapshot.iter().all(|row| row.iter().all(|&tag| tag != 0))
}
