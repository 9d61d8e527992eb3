//! Exhaustive misère outcome search.
//!
//! A position is fully described by the multiset of its run lengths, since
//! runs are independent and their placement on the board does not matter.
//! Positions are kept as sorted length vectors in an `FxHashMap` table.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::board::{Board, Run, RunScanner};
use crate::core::Move;

/// Result for the player about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

/// Memoizing misère solver.
///
/// ```
/// use misere_nim::analysis::{Outcome, Solver};
/// use misere_nim::board::Board;
///
/// let mut solver = Solver::new();
/// // A lone stick must be taken by the player to move.
/// assert_eq!(solver.outcome(&Board::new(&[1])), Outcome::Loss);
/// assert_eq!(solver.outcome(&Board::new(&[2])), Outcome::Win);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    table: FxHashMap<Vec<usize>, Outcome>,
}

impl Solver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions solved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Outcome for the player to move on `board`.
    pub fn outcome(&mut self, board: &Board) -> Outcome {
        let piles = normalize(RunScanner::new(board).runs().map(|run| run.len()).collect());
        self.solve(piles)
    }

    /// A move that leaves the opponent in a lost position, if one exists.
    pub fn winning_move(&mut self, board: &Board) -> Option<Move> {
        let runs: Vec<Run> = RunScanner::new(board).runs().collect();
        let lengths: Vec<usize> = runs.iter().map(Run::len).collect();

        for (i, run) in runs.iter().enumerate() {
            let n = run.len();
            for start in 0..n {
                for end in start..n {
                    let mut child = lengths.clone();
                    child.swap_remove(i);
                    child.extend([start, n - 1 - end].into_iter().filter(|&len| len > 0));

                    if self.solve(normalize(child)) == Outcome::Loss {
                        return Some(Move::new(run.row, run.left + start, run.left + end));
                    }
                }
            }
        }
        None
    }

    fn solve(&mut self, piles: Vec<usize>) -> Outcome {
        // The previous player took the last stick.
        if piles.is_empty() {
            return Outcome::Win;
        }
        if let Some(&outcome) = self.table.get(&piles) {
            return outcome;
        }

        let mut outcome = Outcome::Loss;
        'search: for (i, &n) in piles.iter().enumerate() {
            if i > 0 && piles[i - 1] == n {
                continue;
            }
            for taken in 1..=n {
                let rest = n - taken;
                for a in 0..=rest / 2 {
                    let mut child = piles.clone();
                    child.remove(i);
                    child.extend([a, rest - a].into_iter().filter(|&len| len > 0));

                    if self.solve(normalize(child)) == Outcome::Loss {
                        outcome = Outcome::Win;
                        break 'search;
                    }
                }
            }
        }

        self.table.insert(piles, outcome);
        if is_size_report(self.table.len()) {
            debug!(positions = self.table.len(), "solver table size");
        }
        outcome
    }
}

/// Table sizes at which the solver logs its progress.
fn is_size_report(positions: usize) -> bool {
    positions > 0 && positions % 10_000 == 0
}

fn normalize(mut piles: Vec<usize>) -> Vec<usize> {
    piles.sort_unstable();
    piles
}
