use thiserror::Error;

use crate::{CellCount, CellIndex, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A {grid_size}x{grid_size} grid cannot hide {num_pokemon} pokemon")]
    Configuration {
        grid_size: Coord,
        num_pokemon: CellCount,
    },
    #[error("You got no more pokeballs!")]
    NoBallsLeft,
    #[error("Cell index {index} is outside a grid of {cells} cells")]
    IndexOutOfRange { index: CellIndex, cells: CellCount },
    #[error("Cell ({row}, {col}) is outside a {grid_size}x{grid_size} grid")]
    PositionOutOfRange { row: Coord, col: Coord, grid_size: Coord },
    #[error("Saved game is corrupt: {0}")]
    CorruptSnapshot(SnapshotDefect),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Which snapshot invariant failed to hold on import.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SnapshotDefect {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("expected {expected} cells, found {found}")]
    CellCountMismatch { expected: usize, found: usize },
    #[error("target index {0} is out of range")]
    TargetOutOfRange(CellIndex),
    #[error("target index {0} is listed twice")]
    DuplicateTarget(CellIndex),
    #[error("cell {0} shows a pokemon where none is hidden")]
    StrayRevealedTarget(CellIndex),
    #[error("only some of the pokemon are exposed")]
    PartialLoss,
    #[error("cell {0} is revealed as safe but hides a pokemon")]
    RevealedOverTarget(CellIndex),
    #[error("cell {index} shows hint {found} but {expected} pokemon surround it")]
    WrongHint {
        index: CellIndex,
        expected: u8,
        found: u8,
    },
    #[error("{recorded} attempted catches recorded but {flagged} cells are flagged")]
    CatchCountMismatch {
        recorded: CellCount,
        flagged: CellCount,
    },
    #[error("{remaining} pokeballs left does not match {targets} pokemon and {attempted} attempts")]
    BudgetMismatch {
        remaining: i32,
        targets: CellCount,
        attempted: CellCount,
    },
}

impl From<SnapshotDefect> for GameError {
    fn from(defect: SnapshotDefect) -> Self {
        Self::CorruptSnapshot(defect)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
