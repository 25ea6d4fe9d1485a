use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flat record of a whole game, for persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub grid_size: Coord,
    /// Cell states in index order.
    pub cells: Vec<CellState>,
    /// Target indices in placement order.
    pub targets: Vec<CellIndex>,
    pub attempted_catches: CellCount,
    pub remaining_budget: i32,
}

impl GridState {
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            grid_size: self.grid_size(),
            cells: self.board_as_vec(),
            targets: self.target_locations().to_vec(),
            attempted_catches: self.attempted_catches(),
            remaining_budget: self.remaining_budget(),
        }
    }

    /// Rebuilds a game, checking every invariant a live game maintains.
    pub fn from_snapshot(snapshot: GridSnapshot) -> Result<Self> {
        let GridSnapshot {
            grid_size,
            cells,
            targets,
            attempted_catches,
            remaining_budget,
        } = snapshot;

        if grid_size == 0 {
            return Err(SnapshotDefect::EmptyGrid.into());
        }

        let expected = usize::from(cell_count(grid_size));
        let found = cells.len();
        let side = usize::from(grid_size);
        let board = Array2::from_shape_vec([side, side], cells)
            .map_err(|_| SnapshotDefect::CellCountMismatch { expected, found })?;
        let layout = TargetLayout::from_indices(grid_size, &targets)?;

        let grid = GridState::from_parts(layout, board, attempted_catches, remaining_budget);
        grid.check_cells()?;
        grid.check_counters()?;
        Ok(grid)
    }

    fn check_cells(&self) -> core::result::Result<(), SnapshotDefect> {
        let grid_size = self.grid_size();
        let mut exposed_targets: CellCount = 0;

        for ((row, col), &cell) in self.board().indexed_iter() {
            // indices come from a grid_size x grid_size array
            let pos = (row as Coord, col as Coord);
            let index = position_to_index(pos, grid_size);
            let is_target = self.layout()[pos];

            match cell {
                CellState::RevealedTarget if !is_target => {
                    return Err(SnapshotDefect::StrayRevealedTarget(index));
                }
                CellState::RevealedTarget => exposed_targets += 1,
                CellState::Revealed(_) if is_target => {
                    return Err(SnapshotDefect::RevealedOverTarget(index));
                }
                CellState::Revealed(found) => {
                    let expected = self.layout().adjacent_target_count(pos);
                    if found != expected {
                        return Err(SnapshotDefect::WrongHint {
                            index,
                            expected,
                            found,
                        });
                    }
                }
                CellState::Hidden | CellState::Flagged => {}
            }
        }

        if exposed_targets != 0 && exposed_targets != self.layout().target_count() {
            return Err(SnapshotDefect::PartialLoss);
        }
        Ok(())
    }

    fn check_counters(&self) -> core::result::Result<(), SnapshotDefect> {
        let flagged = self.flagged_count();
        if self.attempted_catches() != flagged {
            return Err(SnapshotDefect::CatchCountMismatch {
                recorded: self.attempted_catches(),
                flagged,
            });
        }

        let targets = self.layout().target_count();
        let expected = i32::from(targets) - i32::from(flagged);
        if self.remaining_budget() != expected || self.remaining_budget() < 0 {
            return Err(SnapshotDefect::BudgetMismatch {
                remaining: self.remaining_budget(),
                targets,
                attempted: flagged,
            });
        }
        Ok(())
    }
}

impl TryFrom<GridSnapshot> for GridState {
    type Error = GameError;

    fn try_from(snapshot: GridSnapshot) -> Result<Self> {
        Self::from_snapshot(snapshot)
    }
}

impl From<GridState> for GridSnapshot {
    fn from(grid: GridState) -> Self {
        grid.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use serde_json::json;

    fn played_grid() -> GridState {
        let layout = TargetLayout::from_indices(4, &[15, 0, 6]).unwrap();
        let mut grid = GridState::with_layout(layout);
        grid.reveal(12).unwrap();
        grid.flag(0).unwrap();
        grid.flag(3).unwrap();
        grid.reveal(13).unwrap();
        grid
    }

    #[test]
    fn snapshot_round_trip_reproduces_state() {
        let grid = played_grid();

        let restored = GridState::from_snapshot(grid.snapshot()).unwrap();

        assert_eq!(restored, grid);
        assert_eq!(restored.target_locations(), &[15, 0, 6]);
        assert_eq!(restored.attempted_catches(), 2);
        assert_eq!(restored.remaining_budget(), 1);
    }

    #[test]
    fn snapshot_round_trip_after_loss() {
        let mut grid = played_grid();
        grid.reveal(6).unwrap();

        let restored = GridState::from_snapshot(grid.snapshot()).unwrap();

        assert!(restored.check_loss());
        assert_eq!(restored, grid);
    }

    #[test]
    fn snapshot_survives_json() {
        let grid = played_grid();

        let json = serde_json::to_string(&grid.snapshot()).unwrap();
        let snapshot: GridSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(GridState::from_snapshot(snapshot).unwrap(), grid);
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let mut snapshot = played_grid().snapshot();
        snapshot.cells.pop();

        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::CellCountMismatch {
                expected: 16,
                found: 15
            }))
        );
    }

    #[test]
    fn rejects_empty_grid() {
        let snapshot = GridSnapshot {
            grid_size: 0,
            cells: vec![],
            targets: vec![],
            attempted_catches: 0,
            remaining_budget: 0,
        };

        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::EmptyGrid))
        );
    }

    #[test]
    fn rejects_duplicate_and_out_of_range_targets() {
        let mut snapshot = played_grid().snapshot();
        snapshot.targets.push(0);
        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::DuplicateTarget(0)))
        );

        let mut snapshot = played_grid().snapshot();
        snapshot.targets[1] = 16;
        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::TargetOutOfRange(16)))
        );
    }

    #[test]
    fn rejects_tampered_hint() {
        let mut snapshot = played_grid().snapshot();
        snapshot.cells[12] = CellState::Revealed(3);

        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::WrongHint {
                index: 12,
                expected: 0,
                found: 3
            }))
        );
    }

    #[test]
    fn rejects_safe_reveal_over_target() {
        let mut snapshot = played_grid().snapshot();
        snapshot.cells[6] = CellState::Revealed(0);

        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::RevealedOverTarget(6)))
        );
    }

    #[test]
    fn rejects_stray_and_partial_target_reveals() {
        let mut snapshot = played_grid().snapshot();
        snapshot.cells[5] = CellState::RevealedTarget;
        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::StrayRevealedTarget(5)))
        );

        let mut snapshot = played_grid().snapshot();
        snapshot.cells[6] = CellState::RevealedTarget;
        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::PartialLoss))
        );
    }

    #[test]
    fn rejects_counter_mismatches() {
        let mut snapshot = played_grid().snapshot();
        snapshot.attempted_catches = 3;
        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::CatchCountMismatch {
                recorded: 3,
                flagged: 2
            }))
        );

        let mut snapshot = played_grid().snapshot();
        snapshot.remaining_budget = 3;
        assert_eq!(
            GridState::from_snapshot(snapshot),
            Err(GameError::CorruptSnapshot(SnapshotDefect::BudgetMismatch {
                remaining: 3,
                targets: 3,
                attempted: 2
            }))
        );
    }

    #[test]
    fn rejects_overdrawn_budget() {
        let layout = TargetLayout::from_indices(2, &[0]).unwrap();
        let mut grid = GridState::with_layout(layout);
        grid.flag(0).unwrap();
        grid.flag(1).unwrap();

        assert!(matches!(
            GridState::from_snapshot(grid.snapshot()),
            Err(GameError::CorruptSnapshot(SnapshotDefect::BudgetMismatch { .. }))
        ));
    }

    #[test]
    fn grid_state_json_goes_through_validation() {
        let grid = played_grid();

        let value = serde_json::to_value(&grid).unwrap();
        assert_eq!(value, serde_json::to_value(grid.snapshot()).unwrap());
        assert_eq!(serde_json::from_value::<GridState>(value).unwrap(), grid);
    }

    #[test]
    fn corrupt_grid_state_json_is_rejected() {
        let layout = TargetLayout::from_indices(2, &[3]).unwrap();
        let mut grid = GridState::with_layout(layout);
        grid.flag(1).unwrap();
        let value = serde_json::to_value(&grid).unwrap();

        let mut lost_catch = value.clone();
        lost_catch["attempted_catches"] = json!(0);
        let err = serde_json::from_value::<GridState>(lost_catch).unwrap_err();
        assert!(err.to_string().starts_with("Saved game is corrupt"));

        let mut repeated_target = value.clone();
        repeated_target["targets"] = json!([3, 3, 3]);
        assert!(serde_json::from_value::<GridState>(repeated_target).is_err());

        let mut short_board = value;
        short_board["cells"] = json!(["Hidden", "Flagged", "Hidden"]);
        assert!(serde_json::from_value::<GridState>(short_board).is_err());
    }
}
