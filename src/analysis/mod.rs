//! Game-theoretic analysis of board positions.

mod solver;

pub use solver::{Outcome, Solver};
