use crate::{Board, Strategy};

fn glyph(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Cooperate => "░░",
        Strategy::Defect => "██",
    }
}

/// Draws the strategies of a board as a box of block characters, with row
/// numbers on the left and column numbers (every tenth column) on top.
pub fn visualize(board: &Board) -> String {
    // Draw the column ruler and the top of the box
    let mut result = String::from("     ");
    for c in (0..board.cols()).step_by(10) {
        result += &format!("{:<20}", c);
    }
    result.truncate(result.trim_end().len());
    result += "\n    ╭";
    for _ in 0..board.cols() {
        result += "──";
    }
    result += "╮\n";

    for (r, row) in board.rows_iter().enumerate() {
        result += &format!("{:>3} │", r);
        for cell in row {
            result += glyph(cell.strategy);
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in 0..board.cols() {
        result += "──";
    }
    result += "╯";
    result
}
