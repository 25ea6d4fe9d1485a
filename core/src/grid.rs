use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridStatus {
    InProgress,
    Won,
    Lost,
}

impl GridStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// State of one game: hidden targets, what the player sees, and the pokeball budget.
///
/// All operations are total over a valid state; the only failure is an out-of-range index.
/// Serde goes through [`GridSnapshot`], so deserializing checks the same rules as
/// [`GridState::from_snapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridSnapshot", into = "GridSnapshot")]
pub struct GridState {
    layout: TargetLayout,
    board: Array2<CellState>,
    attempted_catches: CellCount,
    remaining_budget: i32,
}

impl GridState {
    /// Starts a game with freshly placed targets.
    pub fn new(config: GridConfig, seed: u64) -> Result<Self> {
        let config = GridConfig::new(config.grid_size, config.num_pokemon)?;
        Ok(Self::with_layout(
            RandomTargetGenerator::new(seed).generate(config),
        ))
    }

    pub fn with_layout(layout: TargetLayout) -> Self {
        let side = usize::from(layout.grid_size());
        let remaining_budget = layout.target_count().into();
        Self {
            layout,
            board: Array2::default([side, side]),
            attempted_catches: 0,
            remaining_budget,
        }
    }

    /// Same targets, untouched board.
    pub fn restart(&mut self) {
        self.board.fill(CellState::Hidden);
        self.attempted_catches = 0;
        self.remaining_budget = self.layout.target_count().into();
    }

    pub(crate) fn from_parts(
        layout: TargetLayout,
        board: Array2<CellState>,
        attempted_catches: CellCount,
        remaining_budget: i32,
    ) -> Self {
        Self {
            layout,
            board,
            attempted_catches,
            remaining_budget,
        }
    }

    pub fn grid_size(&self) -> Coord {
        self.layout.grid_size()
    }

    pub fn total_cells(&self) -> CellCount {
        self.layout.total_cells()
    }

    pub fn layout(&self) -> &TargetLayout {
        &self.layout
    }

    pub fn target_locations(&self) -> &[CellIndex] {
        self.layout.locations()
    }

    pub fn attempted_catches(&self) -> CellCount {
        self.attempted_catches
    }

    pub fn remaining_budget(&self) -> i32 {
        self.remaining_budget
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.total_cells() {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfRange {
                index,
                cells: self.total_cells(),
            })
        }
    }

    pub fn position_of(&self, index: CellIndex) -> Result<Coord2> {
        let index = self.validate_index(index)?;
        Ok(index_to_position(index, self.grid_size()))
    }

    pub fn index_of(&self, (row, col): Coord2) -> Result<CellIndex> {
        let size = self.grid_size();
        if row < size && col < size {
            Ok(position_to_index((row, col), size))
        } else {
            Err(GameError::PositionOutOfRange {
                row,
                col,
                grid_size: size,
            })
        }
    }

    pub fn cell_state(&self, index: CellIndex) -> Result<CellState> {
        let pos = self.position_of(index)?;
        Ok(self.board[pos.to_nd_index()])
    }

    /// Cell states in index order.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.board.iter().copied()
    }

    pub fn neighbors(&self, index: CellIndex) -> Result<BTreeSet<CellIndex>> {
        let pos = self.position_of(index)?;
        Ok(self.layout.iter_neighbors(pos).indices().collect())
    }

    /// Stored hint of a revealed cell, else the number of targets around it.
    pub fn hint(&self, index: CellIndex) -> Result<u8> {
        let pos = self.position_of(index)?;
        Ok(self.hint_at(pos))
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(CellState::is_flagged)
    }

    pub fn hidden_count(&self) -> CellCount {
        self.count_cells(CellState::is_hidden)
    }

    pub fn check_loss(&self) -> bool {
        self.board.iter().any(|&cell| cell == CellState::RevealedTarget)
    }

    pub fn check_win(&self) -> bool {
        self.hidden_count() == 0 && self.flagged_count() == self.layout.target_count()
    }

    pub fn status(&self) -> GridStatus {
        if self.check_loss() {
            GridStatus::Lost
        } else if self.check_win() {
            GridStatus::Won
        } else {
            GridStatus::InProgress
        }
    }

    /// Toggles a flag. May leave the budget at -1; undoing that is up to the caller.
    pub fn flag(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        use CellState::*;

        let pos = self.position_of(index)?.to_nd_index();

        Ok(match self.board[pos] {
            Flagged => {
                self.board[pos] = Hidden;
                self.attempted_catches -= 1;
                self.remaining_budget += 1;
                MarkOutcome::Unflagged
            }
            Hidden => {
                self.board[pos] = Flagged;
                self.attempted_catches += 1;
                self.remaining_budget -= 1;
                MarkOutcome::Flagged
            }
            Revealed(_) | RevealedTarget => MarkOutcome::NoChange,
        })
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let pos = self.position_of(index)?;

        if self.layout[pos] {
            self.expose_targets();
            return Ok(RevealOutcome::HitTarget);
        }

        if self.board[pos.to_nd_index()].is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        let cells = self.reveal_from(pos);
        Ok(if cells == 0 {
            RevealOutcome::NoChange
        } else {
            RevealOutcome::Revealed { cells }
        })
    }

    /// Exposes `start` and, for a zero hint, the connected zero region and its border.
    fn reveal_from(&mut self, start: Coord2) -> CellCount {
        let mut revealed = 0;
        let hint = self.expose(start, &mut revealed);
        if hint != 0 {
            return revealed;
        }

        let mut discovered = BTreeSet::from([start]);
        let mut to_visit: VecDeque<Coord2> = VecDeque::from([start]);

        while let Some(visit) = to_visit.pop_front() {
            for neighbor in self.layout.iter_neighbors(visit) {
                if !discovered.insert(neighbor) {
                    continue;
                }

                // flags stay put and block expansion
                if self.board[neighbor.to_nd_index()].is_flagged() {
                    continue;
                }

                if self.expose(neighbor, &mut revealed) == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }

        log::trace!(
            "Cascade from {:?} exposed {} cells, discovered {}",
            start,
            revealed,
            discovered.len()
        );
        revealed
    }

    /// Writes the hint into a non-target cell, counting it if it was hidden.
    fn expose(&mut self, pos: Coord2, revealed: &mut CellCount) -> u8 {
        let hint = self.hint_at(pos);
        let cell = &mut self.board[pos.to_nd_index()];
        if cell.is_hidden() {
            *revealed += 1;
        }
        *cell = CellState::Revealed(hint);
        hint
    }

    /// Loss: every target becomes visible at once.
    ///
    /// A flag sitting on a target is replaced too, so its catch is given back and the catch
    /// counter keeps matching the flags on the board.
    fn expose_targets(&mut self) {
        let grid_size = self.grid_size();
        let mut returned_flags: CellCount = 0;
        for &index in self.layout.locations() {
            let cell = &mut self.board[index_to_position(index, grid_size).to_nd_index()];
            if cell.is_flagged() {
                returned_flags += 1;
            }
            *cell = CellState::RevealedTarget;
        }
        self.attempted_catches -= returned_flags;
        self.remaining_budget += i32::from(returned_flags);
        log::debug!(
            "Pokemon found, exposed all {} targets",
            self.layout.target_count()
        );
    }

    fn hint_at(&self, pos: Coord2) -> u8 {
        match self.board[pos.to_nd_index()] {
            CellState::Revealed(hint) => hint,
            _ => self.layout.adjacent_target_count(pos),
        }
    }

    fn count_cells(&self, pred: impl Fn(CellState) -> bool) -> CellCount {
        // bounded by total_cells
        self.board.iter().filter(|&&cell| pred(cell)).count() as CellCount
    }

    pub(crate) fn board(&self) -> &Array2<CellState> {
        &self.board
    }

    pub(crate) fn board_as_vec(&self) -> Vec<CellState> {
        self.board.iter().copied().collect()
    }
}
