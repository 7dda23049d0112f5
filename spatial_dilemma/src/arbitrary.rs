use quickcheck::{Arbitrary, Gen};

use crate::{Board, Strategy};

/// A finite temptation payoff between 0 and 5.
#[derive(Copy, Clone, Debug)]
pub struct Temptation(pub f64);

impl Arbitrary for Temptation {
    fn arbitrary(g: &mut Gen) -> Self {
        Temptation((u8::arbitrary(g) % 51) as f64 / 10.0)
    }
}

impl Arbitrary for Strategy {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Strategy::Cooperate, Strategy::Defect]).unwrap()
    }
}

// Boards of up to 9 x 9, including single rows and columns.
impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = 1 + (u8::arbitrary(g) % 9) as usize;
        let cols = 1 + (u8::arbitrary(g) % 9) as usize;
        let strategies = (0..rows * cols).map(|_| Strategy::arbitrary(g)).collect();
        Board::from_strategies(rows, cols, strategies).unwrap()
    }
}
