use pokegrid_core::*;
use std::path::{Path, PathBuf};

use crate::clock::Stopwatch;
use crate::storage::{SavedGame, SessionError};

/// One player's run of games: the board, the clock, and where it was last saved.
///
/// This is where the pokeball budget is enforced on top of `GridState::flag`.
#[derive(Debug)]
pub struct Session {
    config: GridConfig,
    grid: GridState,
    stopwatch: Stopwatch,
    save_path: Option<PathBuf>,
}

impl Session {
    pub fn new(config: GridConfig, seed: u64) -> Result<Self> {
        Ok(Self::with_grid(config, GridState::new(config, seed)?))
    }

    pub fn with_grid(config: GridConfig, grid: GridState) -> Self {
        Self {
            config,
            grid,
            stopwatch: Stopwatch::started(),
            save_path: None,
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn status(&self) -> GridStatus {
        self.grid.status()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.stopwatch.elapsed_secs()
    }

    /// Toggles a flag, refusing (and undoing) one that would need a pokeball we do not have.
    pub fn flag(&mut self, pos: Coord2) -> Result<MarkOutcome> {
        self.check_playing()?;
        let index = self.grid.index_of(pos)?;

        let outcome = self.grid.flag(index)?;
        if self.grid.remaining_budget() < 0 {
            let undone = self.grid.flag(index)?;
            debug_assert_eq!(undone, MarkOutcome::Unflagged);
            log::debug!("No pokeballs left for {:?}, flag withdrawn", pos);
            return Err(GameError::NoBallsLeft);
        }

        self.after_move();
        Ok(outcome)
    }

    pub fn reveal(&mut self, pos: Coord2) -> Result<RevealOutcome> {
        self.check_playing()?;
        let index = self.grid.index_of(pos)?;

        let outcome = self.grid.reveal(index)?;
        self.after_move();
        Ok(outcome)
    }

    /// Same pokemon, fresh board and clock.
    pub fn restart(&mut self) {
        self.grid.restart();
        self.stopwatch = Stopwatch::started();
        log::info!("Restarted game");
    }

    /// Fresh pokemon locations with the same size and count.
    pub fn new_game(&mut self, seed: u64) -> Result<()> {
        self.grid = GridState::new(self.config, seed)?;
        self.stopwatch = Stopwatch::started();
        log::info!("Started a new game");
        Ok(())
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            grid: self.grid.snapshot(),
            elapsed_secs: self.elapsed_secs(),
        }
    }

    /// Writes to `path`, or to the last save location when none is given.
    pub fn save(&mut self, path: Option<&Path>) -> std::result::Result<PathBuf, SessionError> {
        let path = match (path, &self.save_path) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(last)) => last.clone(),
            (None, None) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "no file name given and the game was never saved",
                )
                .into());
            }
        };
        self.to_saved().write_to(&path)?;
        self.save_path = Some(path.clone());
        Ok(path)
    }

    /// Replaces the current game with a saved one. On any failure the current game is kept.
    pub fn load(&mut self, path: &Path) -> std::result::Result<(), SessionError> {
        let saved = SavedGame::read_from(path)?;
        self.restore(saved)?;
        self.save_path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn restore(&mut self, saved: SavedGame) -> Result<()> {
        let grid = GridState::from_snapshot(saved.grid)?;
        let config = GridConfig::new_unchecked(grid.grid_size(), grid.layout().target_count());
        let mut stopwatch = Stopwatch::resumed_at(saved.elapsed_secs);
        if grid.status().is_finished() {
            stopwatch.stop();
        }

        self.config = config;
        self.grid = grid;
        self.stopwatch = stopwatch;
        Ok(())
    }

    fn check_playing(&self) -> Result<()> {
        if self.grid.status().is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn after_move(&mut self) {
        let status = self.grid.status();
        if status.is_finished() && self.stopwatch.is_running() {
            self.stopwatch.stop();
            log::info!("Game over ({:?}) after {}s", status, self.elapsed_secs());
        }
    }
}
