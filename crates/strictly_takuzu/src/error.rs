//! Error kinds for cell and grid operations.

/// Errors produced by cell and grid operations.
///
/// All variants are local, recoverable conditions reported to the immediate
/// caller; a failed operation leaves no partial mutation behind. Note that an
/// *invalid* grid is not an error — it is a normal verdict from
/// [`rules::verify`](crate::rules::verify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    /// A required construction parameter is non-finite, or a cell index is
    /// out of range.
    #[display("invalid argument: {}", _0)]
    InvalidArgument(&'static str),

    /// A state tag outside `{0, 1, 2}`.
    #[display("unknown state tag: {}", _0)]
    UnknownState(u8),

    /// Grid size is odd or below the 4x4 minimum.
    #[display("invalid grid size {}: must be even and at least 4", _0)]
    InvalidSize(usize),

    /// A toggle was attempted on a locked cell.
    #[display("cell is locked and cannot change state")]
    BlockedCell,
}

impl std::error::Error for Error {}
