//! Kani arbitrary implementations and proof harnesses.
//!
//! These let the model checker explore every reachable cell state during
//! verification runs.

use crate::{Cell, CellState, Error, LockPolicy};

impl kani::Arbitrary for CellState {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => CellState::Empty,
            1 => CellState::First,
            2 => CellState::Second,
            _ => unreachable!(),
        }
    }
}

impl kani::Arbitrary for LockPolicy {
    fn any() -> Self {
        if kani::any() {
            LockPolicy::Clues
        } else {
            LockPolicy::Sandbox
        }
    }
}

/// Proves the state cycle closes after exactly three steps.
#[kani::proof]
fn verify_cycle_closure() {
    let state: CellState = kani::any();
    assert_eq!(state.next().next().next(), state);
}

/// Proves display tags round-trip through parsing for every state.
#[kani::proof]
fn verify_tag_round_trip() {
    let state: CellState = kani::any();
    assert_eq!(CellState::from_tag(state.tag()), Ok(state));
}

/// Proves a locked cell never changes state.
#[kani::proof]
fn verify_locked_cell_is_inert() {
    let state: CellState = kani::any();
    let mut cell = Cell::new(0.0, 0.0, 1.0, Some(state.tag()), LockPolicy::Sandbox).unwrap();
    cell.lock();
    assert_eq!(cell.toggle(), Err(Error::BlockedCell));
    assert_eq!(cell.state(), state);
}
