use serde::{Deserialize, Serialize};

use crate::*;

/// Size and population of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub grid_size: Coord,
    pub num_pokemon: CellCount,
}

impl GridConfig {
    pub const fn new_unchecked(grid_size: Coord, num_pokemon: CellCount) -> Self {
        Self {
            grid_size,
            num_pokemon,
        }
    }

    /// Rejects empty grids and more pokemon than cells.
    pub fn new(grid_size: Coord, num_pokemon: CellCount) -> Result<Self> {
        if grid_size == 0 || num_pokemon > cell_count(grid_size) {
            return Err(GameError::Configuration {
                grid_size,
                num_pokemon,
            });
        }
        Ok(Self::new_unchecked(grid_size, num_pokemon))
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.grid_size)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 15)
    }
}
