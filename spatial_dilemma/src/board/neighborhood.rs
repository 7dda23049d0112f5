/// Offsets of the Moore neighborhood, in the order in which they are visited.
///
/// The order is fixed so that scores are always accumulated in the same order.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The coordinates of all cells adjacent to `(r, c)` (including diagonally)
/// on a `rows` x `cols` board.
///
/// The board does not wrap around, so corner cells have 3 neighbors, other
/// cells on the border have 5 and interior cells have 8.
pub fn neighbors(rows: usize, cols: usize, r: usize, c: usize) -> Neighbors {
    debug_assert!(
        r < rows && c < cols,
        "({}, {}) is not on a {} x {} board",
        r,
        c,
        rows,
        cols
    );
    Neighbors {
        rows,
        cols,
        r,
        c,
        offset_idx: 0,
    }
}

/// Iterator returned by [`neighbors()`].
#[derive(Clone, Debug)]
pub struct Neighbors {
    rows: usize,
    cols: usize,
    r: usize,
    c: usize,
    offset_idx: usize,
}

impl Iterator for Neighbors {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dr, dc)) = OFFSETS.get(self.offset_idx) {
            self.offset_idx += 1;
            let (Some(r), Some(c)) = (self.r.checked_add_signed(dr), self.c.checked_add_signed(dc))
            else {
                continue;
            };
            if r < self.rows && c < self.cols {
                return Some((r, c));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.offset_idx))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    // Maps arbitrary values onto a board of at least 2 x 2 and a position on it
    fn shape(rows: u8, cols: u8, r: u8, c: u8) -> (usize, usize, usize, usize) {
        let rows = 2 + (rows % 12) as usize;
        let cols = 2 + (cols % 12) as usize;
        (rows, cols, r as usize % rows, c as usize % cols)
    }

    quickcheck! {
        fn neighbor_count_law(rows: u8, cols: u8, r: u8, c: u8) -> bool {
            let (rows, cols, r, c) = shape(rows, cols, r, c);
            let on_vertical_edge = r == 0 || r == rows - 1;
            let on_horizontal_edge = c == 0 || c == cols - 1;
            let expected = match (on_vertical_edge, on_horizontal_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            neighbors(rows, cols, r, c).count() == expected
        }
    }

    quickcheck! {
        fn neighbors_are_adjacent_and_in_bounds(rows: u8, cols: u8, r: u8, c: u8) -> bool {
            let (rows, cols, r, c) = shape(rows, cols, r, c);
            neighbors(rows, cols, r, c).all(|(r2, c2)| {
                r2 < rows && c2 < cols && r.abs_diff(r2).max(c.abs_diff(c2)) == 1
            })
        }
    }

    quickcheck! {
        fn neighborhood_is_symmetric(rows: u8, cols: u8, r: u8, c: u8) -> bool {
            let (rows, cols, r, c) = shape(rows, cols, r, c);
            neighbors(rows, cols, r, c)
                .all(|(r2, c2)| neighbors(rows, cols, r2, c2).any(|n| n == (r, c)))
        }
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(neighbors(1, 1, 0, 0).count(), 0);
    }

    #[test]
    fn single_row() {
        assert_eq!(neighbors(1, 4, 0, 0).collect::<Vec<_>>(), vec![(0, 1)]);
        assert_eq!(neighbors(1, 4, 0, 2).collect::<Vec<_>>(), vec![(0, 1), (0, 3)]);
    }

    #[test]
    fn order_is_row_major() {
        assert_eq!(
            neighbors(3, 3, 1, 1).collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
        assert_eq!(
            neighbors(3, 3, 2, 2).collect::<Vec<_>>(),
            vec![(1, 1), (1, 2), (2, 1)]
        );
    }
}
