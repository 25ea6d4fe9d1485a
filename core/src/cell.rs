use serde::{Deserialize, Serialize};

/// Player-visible state of one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    /// Safe cell showing how many targets surround it.
    Revealed(u8),
    /// Exposed target; only appears once the game is lost.
    RevealedTarget,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_start_hidden() {
        assert_eq!(CellState::default(), CellState::Hidden);
        assert!(CellState::default().is_hidden());
    }
}
