/// The error type for constructing a [`Board`](crate::Board).
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidBoard {
    Empty { rows: usize, cols: usize },
    RaggedRow { row: usize, expected: usize, found: usize },
    WrongRowCount { expected: usize, found: usize },
    WrongCellCount { expected: usize, found: usize },
    TooLarge { rows: usize, cols: usize },
}

impl std::error::Error for InvalidBoard {}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoard::Empty { rows, cols } =>
                write!(f, "A board needs at least one row and one column, but has {} x {}", rows, cols),
            InvalidBoard::RaggedRow { row, expected, found } =>
                write!(f, "Row {} has {} cells, but the board is {} cells wide", row, found, expected),
            InvalidBoard::WrongRowCount { expected, found } =>
                write!(f, "Expected {} rows, but found {}", expected, found),
            InvalidBoard::WrongCellCount { expected, found } =>
                write!(f, "Expected {} cells, but found {}", expected, found),
            InvalidBoard::TooLarge { rows, cols } =>
                write!(f, "A board of {} x {} cells does not fit into memory", rows, cols),
        }
    }
}
