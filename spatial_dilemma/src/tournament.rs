use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{score_pass, update_pass, Board};

/// All boards of a tournament, starting with the initial board with its
/// scores reset.
///
/// Entry `i + 1` is the result of playing one round on entry `i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordedHistory")]
pub struct History {
    /// The payoff of a defector against a cooperator.
    temptation: f64,
    /// Never empty, and all boards have the same dimensions.
    boards: Vec<Board>,
}

/// Plays one round: one game between every pair of neighbors, then every
/// cell imitates the best-scoring cell in its neighborhood.
pub fn play_round(board: &Board, temptation: f64) -> Board {
    let scored = score_pass(board, temptation);
    update_pass(board, &scored)
}

/// Plays `num_gens` rounds starting from `initial` and returns every board
/// along the way, so the result has `num_gens + 1` entries. Scores on
/// `initial` are ignored, entry 0 has the same strategies with all scores zero.
///
/// Panics if `temptation` is not finite.
pub fn run_tournament(initial: &Board, temptation: f64, num_gens: usize) -> History {
    assert!(
        temptation.is_finite(),
        "the temptation payoff must be finite, not {}",
        temptation
    );
    let mut boards = Vec::with_capacity(num_gens + 1);
    boards.push(initial.cleared());
    for generation in 1..=num_gens {
        let next = play_round(&boards[generation - 1], temptation);
        let census = next.census();
        trace!(
            generation,
            cooperators = census.cooperators,
            defectors = census.defectors,
            "Round played"
        );
        boards.push(next);
    }
    History { temptation, boards }
}

impl History {
    pub fn temptation(&self) -> f64 {
        self.temptation
    }

    /// The number of boards, which is one more than the number of rounds played.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false, a history contains at least the initial board.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn num_generations(&self) -> usize {
        self.boards.len() - 1
    }

    pub fn initial(&self) -> &Board {
        &self.boards[0]
    }

    pub fn last(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    /// The first generation from which on the strategies never changed again.
    ///
    /// Returns `None` if the last round still changed something, or if no
    /// round was played.
    pub fn settled_at(&self) -> Option<usize> {
        let last = self.last();
        let unchanged = self
            .boards
            .iter()
            .rev()
            .take_while(|board| board.same_strategies(last))
            .count();
        if unchanged < 2 {
            None
        } else {
            Some(self.boards.len() - unchanged)
        }
    }
}

impl Index<usize> for History {
    type Output = Board;

    fn index(&self, generation: usize) -> &Board {
        &self.boards[generation]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.iter()
    }
}

/// The error type for deserializing a [`History`].
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidHistory {
    NoBoards,
    NonFiniteTemptation,
    DimensionsChanged { generation: usize },
}

impl std::error::Error for InvalidHistory {}

impl std::fmt::Display for InvalidHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidHistory::NoBoards => write!(f, "A history needs at least the initial board"),
            InvalidHistory::NonFiniteTemptation => {
                write!(f, "The temptation payoff of a history must be finite")
            }
            InvalidHistory::DimensionsChanged { generation } => write!(
                f,
                "The board of generation {} has different dimensions than the initial board",
                generation
            ),
        }
    }
}

#[derive(Deserialize)]
struct RecordedHistory {
    temptation: f64,
    boards: Vec<Board>,
}

impl TryFrom<RecordedHistory> for History {
    type Error = InvalidHistory;

    fn try_from(recorded: RecordedHistory) -> Result<Self, Self::Error> {
        if !recorded.temptation.is_finite() {
            return Err(InvalidHistory::NonFiniteTemptation);
        }
        let initial = recorded.boards.first().ok_or(InvalidHistory::NoBoards)?;
        let (rows, cols) = (initial.rows(), initial.cols());
        if let Some(generation) = recorded
            .boards
            .iter()
            .position(|board| board.rows() != rows || board.cols() != cols)
        {
            return Err(InvalidHistory::DimensionsChanged { generation });
        }
        Ok(History {
            temptation: recorded.temptation,
            boards: recorded.boards,
        })
    }
}
