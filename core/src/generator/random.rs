use super::*;

/// Uniform placement by rejection sampling: draw a cell, redraw if it is already taken.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomTargetGenerator {
    seed: u64,
}

impl RandomTargetGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl TargetGenerator for RandomTargetGenerator {
    fn generate(self, config: GridConfig) -> TargetLayout {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let mut layout = TargetLayout::empty(config.grid_size);

        if config.num_pokemon > total_cells {
            log::warn!(
                "Grid already full, requested {} pokemon but only fits {}",
                config.num_pokemon,
                total_cells
            );
        }
        let wanted = config.num_pokemon.min(total_cells);

        // a full grid needs no sampling
        if wanted == total_cells {
            for index in 0..total_cells {
                layout.insert(index);
            }
            return layout;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut draws: u32 = 0;
        while layout.target_count() < wanted {
            draws += 1;
            layout.insert(rng.random_range(0..total_cells));
        }

        log::debug!(
            "Placed {} pokemon on a {}x{} grid in {} draws (seed {})",
            wanted,
            config.grid_size,
            config.grid_size,
            draws,
            self.seed
        );
        layout
    }
}
