#![no_std]

extern crate alloc;

pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use layout::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod config;
mod error;
mod generator;
mod grid;
mod layout;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// `cells` newly exposed safe cells, cascade included.
    Revealed { cells: CellCount },
    HitTarget,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
