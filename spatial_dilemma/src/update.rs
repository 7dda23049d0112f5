use crate::{Board, Cell, Strategy};

/// Computes the strategies for the next round.
///
/// Every cell adopts the strategy that the best-scoring cell among itself
/// and its neighbors played on `old`. Scores are taken from `scored`, the
/// result of [`score_pass()`](crate::score_pass) on `old`. All scores on the
/// returned board are zero.
///
/// Panics if the boards have different dimensions.
pub fn update_pass(old: &Board, scored: &Board) -> Board {
    assert!(
        old.rows() == scored.rows() && old.cols() == scored.cols(),
        "cannot update a {} x {} board with scores for a {} x {} board",
        old.rows(),
        old.cols(),
        scored.rows(),
        scored.cols()
    );
    Board::from_fn(old.rows(), old.cols(), |r, c| {
        Cell::new(imitated_strategy(old, scored, r, c))
    })
}

/// The strategy that the cell at `(r, c)` plays next round.
///
/// The cell itself is the initial best candidate, and a neighbor only takes
/// over with a strictly greater score. So on a tie the cell keeps its strategy,
/// and among equally good neighbors the first one in [`neighbors()`](crate::neighbors)
/// order wins.
pub fn imitated_strategy(old: &Board, scored: &Board, r: usize, c: usize) -> Strategy {
    let mut best_score = scored[(r, c)].score;
    let mut strategy = old[(r, c)].strategy;
    for (r2, c2) in old.neighbors(r, c) {
        let score = scored[(r2, c2)].score;
        if score > best_score {
            best_score = score;
            strategy = old[(r2, c2)].strategy;
        }
    }
    strategy
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::Temptation;
    use crate::score_pass;
    use crate::Strategy::{Cooperate as C, Defect as D};

    // A board with the given strategies and scores
    fn scored_board(cells: &[&[(Strategy, f64)]]) -> Board {
        let mut board = Board::from_rows(
            cells
                .iter()
                .map(|row| row.iter().map(|&(s, _)| s).collect())
                .collect(),
        )
        .unwrap();
        for (r, row) in cells.iter().enumerate() {
            for (c, &(_, score)) in row.iter().enumerate() {
                board.add_score(r, c, score);
            }
        }
        board
    }

    quickcheck! {
        fn scores_are_reset(board: Board, temptation: Temptation) -> bool {
            let next = update_pass(&board, &score_pass(&board, temptation.0));
            next.rows() == board.rows()
                && next.cols() == board.cols()
                && next.total_score() == 0.0
        }
    }

    quickcheck! {
        // A strategy only spreads from a neighbor that scored strictly more.
        fn adopted_strategy_comes_from_best_candidate(board: Board, temptation: Temptation) -> bool {
            let scored = score_pass(&board, temptation.0);
            let next = update_pass(&board, &scored);
            let adopted_from_best = next.cells().all(|(r, c, cell)| {
                let own_score = scored[(r, c)].score;
                let best_score = board
                    .neighbors(r, c)
                    .map(|(r2, c2)| scored[(r2, c2)].score)
                    .fold(own_score, f64::max);
                if best_score == own_score {
                    cell.strategy == board[(r, c)].strategy
                } else {
                    board.neighbors(r, c).any(|(r2, c2)| {
                        scored[(r2, c2)].score == best_score && board[(r2, c2)].strategy == cell.strategy
                    })
                }
            });
            adopted_from_best
        }
    }

    #[test]
    fn strictly_best_self_keeps_strategy() {
        let scored = scored_board(&[
            &[(D, 1.0), (D, 2.0), (D, 0.5)],
            &[(D, 1.0), (C, 3.0), (D, 2.9)],
            &[(D, 0.0), (D, 0.0), (D, 2.5)],
        ]);
        let next = update_pass(&scored.cleared(), &scored);
        assert_eq!(next[(1, 1)].strategy, C);
    }

    #[test]
    fn ties_keep_own_strategy() {
        let scored = scored_board(&[&[(D, 2.0), (C, 2.0), (D, 2.0)]]);
        let next = update_pass(&scored.cleared(), &scored);
        assert_eq!(next[(0, 0)].strategy, D);
        assert_eq!(next[(0, 1)].strategy, C);
        assert_eq!(next[(0, 2)].strategy, D);
    }

    #[test]
    fn strictly_better_neighbor_wins() {
        let scored = scored_board(&[&[(D, 2.0), (C, 2.5), (D, 2.0)]]);
        let next = update_pass(&scored.cleared(), &scored);
        assert_eq!(next.uniform_strategy(), Some(C));
    }

    #[test]
    fn first_of_equally_good_neighbors_wins() {
        let scored = scored_board(&[&[(D, 3.0), (C, 1.0), (C, 3.0)]]);
        assert_eq!(imitated_strategy(&scored.cleared(), &scored, 0, 1), D);
        let scored = scored_board(&[&[(C, 3.0), (D, 1.0), (D, 3.0)]]);
        assert_eq!(imitated_strategy(&scored.cleared(), &scored, 0, 1), C);
    }

    #[test]
    fn old_board_strategies_are_used() {
        // The strategy is looked up on the old board, not on the scored board
        let old = Board::from_rows(vec![vec![C, D]]).unwrap();
        let scored = scored_board(&[&[(D, 0.0), (C, 5.0)]]);
        let next = update_pass(&old, &scored);
        assert_eq!(next.uniform_strategy(), Some(D));
    }

    #[test]
    #[should_panic]
    fn mismatched_boards_panic() {
        let old = Board::filled(2, 2, C).unwrap();
        let scored = Board::filled(2, 3, C).unwrap();
        let _ = update_pass(&old, &scored);
    }
}
