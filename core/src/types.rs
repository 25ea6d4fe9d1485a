/// Single coordinate axis, used for the grid side and for rows/columns.
pub type Coord = u8;

/// Linear cell index, `row * grid_size + col`.
pub type CellIndex = u16;

/// Count type used for target counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional position `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square grid with side `grid_size`.
pub const fn cell_count(grid_size: Coord) -> CellCount {
    let side = grid_size as CellCount;
    side.saturating_mul(side)
}

/// Converts a linear index into `(row, col)`. The index must be in range.
pub const fn index_to_position(index: CellIndex, grid_size: Coord) -> Coord2 {
    let side = grid_size as CellIndex;
    ((index / side) as Coord, (index % side) as Coord)
}

/// Converts `(row, col)` into a linear index. The position must be in range.
pub const fn position_to_index((row, col): Coord2, grid_size: Coord) -> CellIndex {
    (row as CellIndex) * (grid_size as CellIndex) + (col as CellIndex)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `position`, returning a value only when it remains on a grid of side `bounds`.
fn apply_delta(position: Coord2, delta: (i8, i8), bounds: Coord) -> Option<Coord2> {
    let (row, col) = position;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= bounds {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= bounds {
        return None;
    }

    Some((next_row, next_col))
}

/// The up to eight in-bounds neighbors of a cell, no wraparound.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }

    /// Same neighbors, as linear indices.
    pub fn indices(self) -> impl Iterator<Item = CellIndex> {
        let grid_size = self.bounds;
        self.map(move |pos| position_to_index(pos, grid_size))
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn index_and_position_are_in_bijection() {
        for index in 0..cell_count(7) {
            let pos = index_to_position(index, 7);
            assert_eq!(position_to_index(pos, 7), index);
        }
        assert_eq!(index_to_position(10, 4), (2, 2));
        assert_eq!(position_to_index((3, 1), 4), 13);
    }

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), 3).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_and_center_neighbor_counts() {
        assert_eq!(NeighborIter::new((0, 1), 3).count(), 5);
        assert_eq!(NeighborIter::new((1, 1), 3).count(), 8);
        assert_eq!(NeighborIter::new((2, 2), 3).count(), 3);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), 1).count(), 0);
    }

    #[test]
    fn neighbor_indices_follow_row_major_order() {
        let indices: Vec<_> = NeighborIter::new((1, 1), 3).indices().collect();
        assert_eq!(indices, [0, 1, 2, 3, 5, 6, 7, 8]);
    }
}
