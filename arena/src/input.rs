use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use spatial_dilemma::Board;

/// Reads an initial board in the text format of [`Board::from_str()`].
pub fn load_board(path: &Path) -> anyhow::Result<Board> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read the board file '{}'", path.display()))?;
    let board = text
        .parse::<Board>()
        .with_context(|| format!("Invalid board file '{}'", path.display()))?;
    Ok(board)
}

/// Board dimensions given on the command line as `<rows>x<cols>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl FromStr for Dimensions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, cols) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected <rows>x<cols>, found '{}'", s))?;
        let parse = |dim: &str| {
            dim.trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| format!("'{}' is not a positive number", dim))
        };
        Ok(Dimensions {
            rows: parse(rows)?,
            cols: parse(cols)?,
        })
    }
}

/// Accepts any finite number.
pub fn parse_temptation(s: &str) -> Result<f64, String> {
    let temptation = s.parse::<f64>().map_err(|err| err.to_string())?;
    if temptation.is_finite() {
        Ok(temptation)
    } else {
        Err(format!("the temptation payoff must be finite, not {}", s))
    }
}

pub fn parse_probability(s: &str) -> Result<f64, String> {
    let p = s.parse::<f64>().map_err(|err| err.to_string())?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{} is not between 0 and 1", s))
    }
}

#[cfg(test)]
mod tests {
    use spatial_dilemma::Strategy;

    use super::*;

    #[test]
    fn dimensions() {
        assert_eq!(
            "50x80".parse::<Dimensions>(),
            Ok(Dimensions { rows: 50, cols: 80 })
        );
        assert_eq!("3X4".parse::<Dimensions>(), Ok(Dimensions { rows: 3, cols: 4 }));
        assert!("50".parse::<Dimensions>().is_err());
        assert!("0x5".parse::<Dimensions>().is_err());
        assert!("ax5".parse::<Dimensions>().is_err());
    }

    #[test]
    fn temptation() {
        assert_eq!(parse_temptation("1.65"), Ok(1.65));
        assert_eq!(parse_temptation("-0.5"), Ok(-0.5));
        assert!(parse_temptation("inf").is_err());
        assert!(parse_temptation("NaN").is_err());
        assert!(parse_temptation("lots").is_err());
    }

    #[test]
    fn probability() {
        assert_eq!(parse_probability("0.25"), Ok(0.25));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("1.01").is_err());
        assert!(parse_probability("-0.1").is_err());
    }

    #[test]
    fn board_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.txt");
        std::fs::write(&path, "2 3\nCDC\nCCC\n").unwrap();
        let board = load_board(&path).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board[(0, 1)].strategy, Strategy::Defect);

        std::fs::write(&path, "2 3\nCDC\nCQC\n").unwrap();
        let err = load_board(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("'Q' is not a strategy"));
        assert!(load_board(&dir.path().join("missing.txt")).is_err());
    }
}
