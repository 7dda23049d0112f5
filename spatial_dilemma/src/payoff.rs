use crate::{Board, Strategy};

/// Payoffs of a single game between two neighbors.
///
/// Returns `(payoff_a, payoff_b)`. Mutual cooperation pays 1 to both,
/// a defector facing a cooperator gets the `temptation` and the
/// cooperator nothing, mutual defection pays nothing.
pub fn payoff(a: Strategy, b: Strategy, temptation: f64) -> (f64, f64) {
    match (a, b) {
        (Strategy::Cooperate, Strategy::Cooperate) => (1.0, 1.0),
        (Strategy::Cooperate, Strategy::Defect) => (0.0, temptation),
        (Strategy::Defect, Strategy::Cooperate) => (temptation, 0.0),
        (Strategy::Defect, Strategy::Defect) => (0.0, 0.0),
    }
}

/// Plays one game between every pair of neighbors and returns a new board
/// with the same strategies and the accumulated scores.
///
/// Scores on the input board are ignored. Every unordered pair of neighbors
/// plays exactly once: the game is played when visiting the cell that comes
/// first in row-major order, and both sides are credited.
pub fn score_pass(board: &Board, temptation: f64) -> Board {
    let mut scored = board.cleared();
    for (r, c, cell) in board.cells() {
        for (r2, c2) in board.neighbors(r, c) {
            if (r2, c2) < (r, c) {
                continue;
            }
            let (gain, neighbor_gain) = payoff(cell.strategy, board[(r2, c2)].strategy, temptation);
            scored.add_score(r, c, gain);
            scored.add_score(r2, c2, neighbor_gain);
        }
    }
    scored
}
