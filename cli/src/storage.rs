use pokegrid_core::{GameError, GridSnapshot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Cannot access save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("The file used is incorrect: {0}")]
    Format(#[from] serde_json::Error),
}

/// Everything written to a save file: the board plus the time on the clock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub grid: GridSnapshot,
    pub elapsed_secs: u64,
}

impl SavedGame {
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), SessionError> {
        fs::write(path, self.to_json()?)?;
        log::info!("Saved game to {}", path.display());
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self, SessionError> {
        let saved = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Read saved game from {}", path.display());
        Ok(saved)
    }
}
