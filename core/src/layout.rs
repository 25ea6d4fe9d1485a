use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Where the pokemon hide. Fixed for the lifetime of a game.
///
/// Keeps the locations in placement order (that order is what gets saved) alongside a mask for
/// constant-time lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetLayout {
    grid_size: Coord,
    locations: Vec<CellIndex>,
    mask: Array2<bool>,
}

impl TargetLayout {
    pub(crate) fn empty(grid_size: Coord) -> Self {
        let side = usize::from(grid_size);
        Self {
            grid_size,
            locations: Vec::new(),
            mask: Array2::default([side, side]),
        }
    }

    /// Builds a layout from explicit indices, failing if any is out of range or repeated.
    pub fn from_indices(grid_size: Coord, indices: &[CellIndex]) -> Result<Self> {
        if grid_size == 0 {
            return Err(SnapshotDefect::EmptyGrid.into());
        }

        let mut layout = Self::empty(grid_size);
        for &index in indices {
            if index >= layout.total_cells() {
                return Err(SnapshotDefect::TargetOutOfRange(index).into());
            }
            if !layout.insert(index) {
                return Err(SnapshotDefect::DuplicateTarget(index).into());
            }
        }
        Ok(layout)
    }

    /// Adds a target, returning `false` if the cell already had one.
    pub(crate) fn insert(&mut self, index: CellIndex) -> bool {
        let pos = index_to_position(index, self.grid_size).to_nd_index();
        if self.mask[pos] {
            return false;
        }
        self.mask[pos] = true;
        self.locations.push(index);
        true
    }

    pub fn grid_size(&self) -> Coord {
        self.grid_size
    }

    pub fn total_cells(&self) -> CellCount {
        cell_count(self.grid_size)
    }

    pub fn target_count(&self) -> CellCount {
        // bounded by total_cells, which is a CellCount
        self.locations.len() as CellCount
    }

    pub fn locations(&self) -> &[CellIndex] {
        &self.locations
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self[index_to_position(index, self.grid_size)]
    }

    pub fn adjacent_target_count(&self, pos: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(pos).filter(|&n| self[n]).count() as u8
    }

    pub fn iter_neighbors(&self, pos: Coord2) -> NeighborIter {
        NeighborIter::new(pos, self.grid_size)
    }
}

impl Index<Coord2> for TargetLayout {
    type Output = bool;

    fn index(&self, pos: Coord2) -> &Self::Output {
        &self.mask[pos.to_nd_index()]
    }
}
