mod error;
mod neighborhood;
mod text;

use std::ops::Index;

pub use error::*;
pub use neighborhood::*;
pub use text::*;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Strategy;

/// The contents of a single position on the board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub strategy: Strategy,
    /// The payoff accumulated in the current round. Zero on boards that
    /// have not been through a payoff pass.
    pub score: f64,
}

impl Cell {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            score: 0.0,
        }
    }
}

/// How many cells play which strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub cooperators: usize,
    pub defectors: usize,
}

impl Census {
    /// Fraction of the cells that cooperate, between 0 and 1.
    pub fn cooperation_rate(&self) -> f64 {
        let total = self.cooperators + self.defectors;
        if total == 0 {
            0.0
        } else {
            self.cooperators as f64 / total as f64
        }
    }
}

/// A rectangular grid of cells with at least one row and one column.
///
/// The dimensions never change after construction. Every round of a
/// tournament produces a new board, so boards can be shared freely
/// once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    // In row-major order, i.e. indexed by [r * cols + c].
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates a board from a list of rows of strategies. All scores are zero.
    pub fn from_rows(rows: Vec<Vec<Strategy>>) -> Result<Self, InvalidBoard> {
        let cols = rows.first().map_or(0, Vec::len);
        let num_rows = rows.len();
        let mut strategies = Vec::new();
        for (row, strategies_in_row) in rows.into_iter().enumerate() {
            if strategies_in_row.len() != cols {
                return Err(InvalidBoard::RaggedRow {
                    row,
                    expected: cols,
                    found: strategies_in_row.len(),
                });
            }
            strategies.extend(strategies_in_row);
        }
        Self::from_strategies(num_rows, cols, strategies)
    }

    /// Creates a board from strategies given in row-major order. All scores are zero.
    pub fn from_strategies(
        rows: usize,
        cols: usize,
        strategies: Vec<Strategy>,
    ) -> Result<Self, InvalidBoard> {
        let num_cells = Self::num_cells(rows, cols)?;
        if strategies.len() != num_cells {
            return Err(InvalidBoard::WrongCellCount {
                expected: num_cells,
                found: strategies.len(),
            });
        }
        Ok(Self {
            cells: strategies.into_iter().map(Cell::new).collect(),
            rows,
            cols,
        })
    }

    /// A board on which every cell plays the same strategy.
    pub fn filled(rows: usize, cols: usize, strategy: Strategy) -> Result<Self, InvalidBoard> {
        let num_cells = Self::num_cells(rows, cols)?;
        Self::from_strategies(rows, cols, vec![strategy; num_cells])
    }

    /// A board on which every cell independently defects with the given probability.
    ///
    /// Panics if `defect_probability` is not in `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        defect_probability: f64,
        rng: &mut R,
    ) -> Result<Self, InvalidBoard> {
        assert!(
            (0.0..=1.0).contains(&defect_probability),
            "defect probability {} is not in [0, 1]",
            defect_probability
        );
        let num_cells = Self::num_cells(rows, cols)?;
        let strategies = (0..num_cells)
            .map(|_| {
                if rng.gen_bool(defect_probability) {
                    Strategy::Defect
                } else {
                    Strategy::Cooperate
                }
            })
            .collect();
        Self::from_strategies(rows, cols, strategies)
    }

    /// The number of cells of a `rows` x `cols` board, if such a board can exist.
    pub(crate) fn num_cells(rows: usize, cols: usize) -> Result<usize, InvalidBoard> {
        if rows == 0 || cols == 0 {
            return Err(InvalidBoard::Empty { rows, cols });
        }
        // A Vec can hold at most isize::MAX bytes
        let max_cells = isize::MAX as usize / std::mem::size_of::<Cell>();
        rows
            .checked_mul(cols)
            .filter(|&num_cells| num_cells <= max_cells)
            .ok_or(InvalidBoard::TooLarge { rows, cols })
    }

    // The caller guarantees that rows and cols are non-zero.
    pub(crate) fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> Cell,
    ) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Self { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> Option<Cell> {
        if r < self.rows && c < self.cols {
            Some(self.cells[r * self.cols + c])
        } else {
            None
        }
    }

    pub fn set_strategy(&mut self, r: usize, c: usize, strategy: Strategy) {
        let idx = self.idx(r, c);
        self.cells[idx].strategy = strategy;
    }

    pub(crate) fn add_score(&mut self, r: usize, c: usize, amount: f64) {
        let idx = self.idx(r, c);
        self.cells[idx].score += amount;
    }

    /// The same strategies, with all scores reset to zero.
    pub fn cleared(&self) -> Self {
        Self {
            cells: self.cells.iter().map(|cell| Cell::new(cell.strategy)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// All cells with their coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }

    /// The rows of the board, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// The coordinates of the cells adjacent to `(r, c)`, see [`neighbors()`].
    pub fn neighbors(&self, r: usize, c: usize) -> Neighbors {
        neighbors(self.rows, self.cols, r, c)
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell.strategy {
                Strategy::Cooperate => census.cooperators += 1,
                Strategy::Defect => census.defectors += 1,
            }
        }
        census
    }

    pub fn total_score(&self) -> f64 {
        self.cells.iter().map(|cell| cell.score).sum()
    }

    /// Returns the strategy if the whole board plays the same one.
    pub fn uniform_strategy(&self) -> Option<Strategy> {
        let first = self.cells[0].strategy;
        self.cells
            .iter()
            .all(|cell| cell.strategy == first)
            .then_some(first)
    }

    /// Do both boards have the same dimensions and the same strategy in every cell?
    ///
    /// Scores are not compared.
    pub fn same_strategies(&self, other: &Board) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.strategy == b.strategy)
    }

    fn idx(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "({}, {}) is out of bounds for a {} x {} board",
            r,
            c,
            self.rows,
            self.cols
        );
        r * self.cols + c
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Cell;

    /// Panics if the coordinates are out of bounds.
    fn index(&self, (r, c): (usize, usize)) -> &Cell {
        &self.cells[self.idx(r, c)]
    }
}

/// Serialized form of a [`Board`], with explicit rows.
#[derive(Serialize, Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        Self {
            rows: board.rows,
            cols: board.cols,
            cells: board.rows_iter().map(<[Cell]>::to_vec).collect(),
        }
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidBoard;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::num_cells(raw.rows, raw.cols)?;
        if raw.cells.len() != raw.rows {
            return Err(InvalidBoard::WrongRowCount {
                expected: raw.rows,
                found: raw.cells.len(),
            });
        }
        let mut cells = Vec::new();
        for (row, cells_in_row) in raw.cells.into_iter().enumerate() {
            if cells_in_row.len() != raw.cols {
                return Err(InvalidBoard::RaggedRow {
                    row,
                    expected: raw.cols,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }
        Ok(Self {
            cells,
            rows: raw.rows,
            cols: raw.cols,
        })
    }
}
