/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = usize;

/// Two-dimensional board position `(row, col)`.
pub type Coord2 = (Coord, Coord);

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `center`, returning a value only when it remains in bounds.
fn apply_delta(center: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = center;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterator over the in-bounds positions at Chebyshev distance 1 from a
/// center position. Adjacency is purely positional, so the neighbor relation
/// is symmetric and irreflexive by construction and never needs to be stored.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
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

    fn neighbors(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        NeighborIter::new(center, bounds).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let found = neighbors((1, 1), (3, 3));
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        assert_eq!(neighbors((0, 0), (3, 3)), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbors((2, 2), (3, 3)), vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        assert_eq!(neighbors((0, 1), (3, 3)).len(), 5);
    }

    #[test]
    fn lone_cell_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), (1, 1)), Vec::<Coord2>::new());
    }

    #[test]
    fn relation_is_symmetric_and_chebyshev_bounded() {
        let bounds = (4, 5);
        for row in 0..bounds.0 {
            for col in 0..bounds.1 {
                for (n_row, n_col) in neighbors((row, col), bounds) {
                    assert!(row.abs_diff(n_row) <= 1);
                    assert!(col.abs_diff(n_col) <= 1);
                    assert_ne!((n_row, n_col), (row, col));
                    assert!(neighbors((n_row, n_col), bounds).contains(&(row, col)));
                }
            }
        }
    }
}
