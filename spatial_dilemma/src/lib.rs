//! A spatial Prisoner's Dilemma.
//!
//! Every cell of a [`Board`] plays [`Cooperate`](Strategy::Cooperate) or
//! [`Defect`](Strategy::Defect) against each of its up to eight neighbors,
//! then imitates whichever cell in its neighborhood scored best.
//! [`run_tournament()`] repeats this and records every generation.

pub use board::*;
pub use payoff::*;
pub use strategy::*;
pub use tournament::*;
pub use update::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod payoff;
mod strategy;
mod tournament;
mod update;
mod visualization;
