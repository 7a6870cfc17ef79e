//! Tests for grid construction and interaction.

use rand::rngs::StdRng;
use rand::SeedableRng;
use strictly_takuzu::{
    rules, CellState, Error, FillMode, Grid, GridConfig, Layout, LockPolicy,
};

fn layout() -> Layout {
    Layout::new(360.0, Layout::DEFAULT_MARGIN).expect("finite layout")
}

fn blank_config(size: usize) -> GridConfig {
    GridConfig::new(size, FillMode::Blank, LockPolicy::Clues, layout())
}

#[test]
fn test_construction_validity() {
    for size in [1, 2, 3, 5, 7, 9] {
        assert_eq!(
            Grid::new(&blank_config(size)).unwrap_err(),
            Error::InvalidSize(size)
        );
    }
    for size in [4, 6, 8, 12] {
        assert!(Grid::new(&blank_config(size)).is_ok());
    }
}

#[test]
fn test_solving_a_blank_grid_by_toggling() {
    let target = [
        [1, 2, 1, 2],
        [2, 1, 2, 1],
        [1, 2, 2, 1],
        [2, 1, 1, 2],
    ];

    let mut grid = Grid::new(&blank_config(4)).expect("valid config");
    assert!(!rules::verify(&grid.snapshot()).valid());

    for (row, line) in target.iter().enumerate() {
        for (col, &tag) in line.iter().enumerate() {
            for _ in 0..tag {
                grid.toggle_at(row, col).expect("blank cells are unlocked");
            }
        }
    }

    let snapshot = grid.snapshot();
    assert_eq!(snapshot[2][1], 2);
    let verdict = rules::verify(&snapshot);
    assert!(verdict.valid());
    assert_eq!(verdict.reason(), None);
}

#[test]
fn test_pointer_play_flow() {
    let mut grid = Grid::new(&blank_config(4)).expect("valid config");
    let cell = grid.cell(2, 3).expect("in range").clone();
    let (x, y) = (cell.x() + cell.size() / 2.0, cell.y() + cell.size() / 2.0);

    assert_eq!(grid.locate(x, y), Some((2, 3)));
    assert_eq!(grid.play(x, y), Ok(Some(CellState::First)));
    assert_eq!(grid.play(x, y), Ok(Some(CellState::Second)));
    assert_eq!(grid.play(x, y), Ok(Some(CellState::Empty)));

    // The outer margin belongs to no cell.
    assert_eq!(grid.play(0.0, 0.0), Ok(None));
}

#[test]
fn test_clues_survive_interaction() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = GridConfig::new(6, FillMode::Random, LockPolicy::Clues, layout());
    let mut grid = Grid::new_with_rng(&config, &mut rng).expect("valid config");

    let before = grid.snapshot();
    for row in 0..6 {
        for col in 0..6 {
            let locked = grid.cell(row, col).expect("in range").locked();
            let result = grid.toggle_at(row, col);
            if locked {
                assert_eq!(result, Err(Error::BlockedCell));
            } else {
                assert!(result.is_ok());
            }
        }
    }

    let after = grid.snapshot();
    for row in 0..6 {
        for col in 0..6 {
            if grid.cell(row, col).expect("in range").locked() {
                assert_eq!(after[row][col], before[row][col]);
            }
        }
    }
}

#[test]
fn test_snapshot_idempotence() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = GridConfig::new(8, FillMode::Random, LockPolicy::Clues, layout());
    let grid = Grid::new_with_rng(&config, &mut rng).expect("valid config");
    assert_eq!(grid.snapshot(), grid.snapshot());
}

#[test]
fn test_random_fill_has_no_solvability_guarantee() {
    // Random fill may produce an already-broken board; verification must
    // still return a verdict rather than fail.
    let mut rng = StdRng::seed_from_u64(42);
    let config = GridConfig::new(4, FillMode::Random, LockPolicy::Sandbox, layout());
    let grid = Grid::new_with_rng(&config, &mut rng).expect("valid config");
    let verdict = rules::verify(&grid.snapshot());
    assert_eq!(verdict.valid(), verdict.reason().is_none());
}

#[test]
fn test_display_matches_snapshot() {
    let grid = Grid::new(&blank_config(4)).expect("valid config");
    assert_eq!(grid.to_string(), "[0, 0, 0, 0]\n".repeat(4));
}
