//! The plain-text board format.
//!
//! ```text
//! 3 4
//! CCDC
//! CCCC
//! DCCC
//! ```
//!
//! The first line holds the number of rows and columns, followed by one line
//! per row with one `C` (cooperate) or `D` (defect) per cell.

use std::str::FromStr;

use super::{Board, InvalidBoard};
use crate::Strategy;

/// The error type for parsing a [`Board`] from text.
///
/// Line and column numbers start at 1.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    MissingHeader,
    InvalidHeader { header: String },
    MissingRow { row: usize, expected_rows: usize },
    InvalidCharacter { line: usize, column: usize, found: char },
    WrongRowLength { line: usize, expected: usize, found: usize },
    TrailingContent { line: usize },
    InvalidBoard(InvalidBoard),
}

impl From<InvalidBoard> for ParseBoardError {
    fn from(err: InvalidBoard) -> Self {
        ParseBoardError::InvalidBoard(err)
    }
}

impl std::error::Error for ParseBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseBoardError::InvalidBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::MissingHeader => {
                write!(f, "The board is empty, expected a header with the number of rows and columns")
            }
            ParseBoardError::InvalidHeader { header } => write!(
                f,
                "Expected the first line to contain the number of rows and columns, but found '{}'",
                header
            ),
            ParseBoardError::MissingRow { row, expected_rows } => write!(
                f,
                "The header announces {} rows, but row {} is missing",
                expected_rows, row
            ),
            ParseBoardError::InvalidCharacter { line, column, found } => write!(
                f,
                "Line {}, column {}: '{}' is not a strategy, expected 'C' or 'D'",
                line, column, found
            ),
            ParseBoardError::WrongRowLength {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {} has {} cells, but the header announces {} columns",
                line, found, expected
            ),
            ParseBoardError::TrailingContent { line } => {
                write!(f, "Line {} comes after the last row of the board", line)
            }
            ParseBoardError::InvalidBoard(_) => write!(f, "The header describes an invalid board"),
        }
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate();

        let (_, header) = lines.next().ok_or(ParseBoardError::MissingHeader)?;
        let mut dims = header.split_whitespace().map(str::parse::<usize>);
        let (rows, cols) = match (dims.next(), dims.next(), dims.next()) {
            (Some(Ok(rows)), Some(Ok(cols)), None) => (rows, cols),
            _ => {
                return Err(ParseBoardError::InvalidHeader {
                    header: String::from(header),
                })
            }
        };
        Board::num_cells(rows, cols)?;

        // Grows with the rows actually present
        let mut strategies = Vec::new();
        for row in 0..rows {
            let (line_idx, line) = lines.next().ok_or(ParseBoardError::MissingRow {
                row,
                expected_rows: rows,
            })?;
            let line = line.trim_end();
            let mut found = 0;
            for (column, ch) in line.chars().enumerate() {
                let strategy =
                    Strategy::from_char(ch).ok_or(ParseBoardError::InvalidCharacter {
                        line: line_idx + 1,
                        column: column + 1,
                        found: ch,
                    })?;
                strategies.push(strategy);
                found += 1;
            }
            if found != cols {
                return Err(ParseBoardError::WrongRowLength {
                    line: line_idx + 1,
                    expected: cols,
                    found,
                });
            }
        }

        if let Some((line_idx, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(ParseBoardError::TrailingContent { line: line_idx + 1 });
        }

        Ok(Board::from_strategies(rows, cols, strategies)?)
    }
}

impl Board {
    /// Writes the board in the format understood by [`Board::from_str()`].
    pub fn to_text(&self) -> String {
        let mut result = format!("{} {}\n", self.rows, self.cols);
        for row in self.rows_iter() {
            result.extend(row.iter().map(|cell| cell.strategy.to_char()));
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::Strategy::{Cooperate as C, Defect as D};

    quickcheck! {
        fn text_roundtrip(board: Board) -> bool {
            board.to_text().parse::<Board>() == Ok(board.cleared())
        }
    }

    #[test]
    fn parse() {
        let board: Board = "3 4\nCCDC\nCCCC\nDCCC\n".parse().unwrap();
        assert_eq!(
            board,
            Board::from_rows(vec![
                vec![C, C, D, C],
                vec![C, C, C, C],
                vec![D, C, C, C],
            ])
            .unwrap()
        );
    }

    #[test]
    fn tolerates_windows_line_endings_and_trailing_blank_lines() {
        let board: Board = "2 2\r\nCD \r\nDC\r\n\r\n\n".parse().unwrap();
        assert_eq!(board, Board::from_rows(vec![vec![C, D], vec![D, C]]).unwrap());
    }

    #[test]
    fn rejects_unknown_strategies() {
        assert_eq!(
            "2 2\nCC\nCX\n".parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter {
                line: 3,
                column: 2,
                found: 'X'
            })
        );
    }

    #[test]
    fn rejects_bad_headers() {
        assert_eq!("".parse::<Board>(), Err(ParseBoardError::MissingHeader));
        assert_eq!(
            "3\nCCC\n".parse::<Board>(),
            Err(ParseBoardError::InvalidHeader {
                header: String::from("3")
            })
        );
        assert_eq!(
            "-1 2\n".parse::<Board>(),
            Err(ParseBoardError::InvalidHeader {
                header: String::from("-1 2")
            })
        );
        assert_eq!(
            "0 2\n".parse::<Board>(),
            Err(ParseBoardError::InvalidBoard(InvalidBoard::Empty {
                rows: 0,
                cols: 2
            }))
        );
    }

    #[test]
    fn rejects_huge_headers() {
        assert_eq!(
            "5000000000 5000000000\nCC\n".parse::<Board>(),
            Err(ParseBoardError::InvalidBoard(InvalidBoard::TooLarge {
                rows: 5_000_000_000,
                cols: 5_000_000_000
            }))
        );
        assert_eq!(
            "4000000000 4000000000\nCC\n".parse::<Board>(),
            Err(ParseBoardError::InvalidBoard(InvalidBoard::TooLarge {
                rows: 4_000_000_000,
                cols: 4_000_000_000
            }))
        );
        assert_eq!(
            "1 4000000000\nCC\n".parse::<Board>(),
            Err(ParseBoardError::WrongRowLength {
                line: 2,
                expected: 4_000_000_000,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert_eq!(
            "2 3\nCCC\n".parse::<Board>(),
            Err(ParseBoardError::MissingRow {
                row: 1,
                expected_rows: 2
            })
        );
        assert_eq!(
            "2 3\nCCC\nCC\n".parse::<Board>(),
            Err(ParseBoardError::WrongRowLength {
                line: 3,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "1 3\nCCC\nDDD\n".parse::<Board>(),
            Err(ParseBoardError::TrailingContent { line: 3 })
        );
    }

    #[test]
    fn to_text() {
        let board = Board::from_rows(vec![vec![C, D], vec![D, D]]).unwrap();
        assert_eq!(board.to_text(), "2 2\nCD\nDD\n");
    }
}
