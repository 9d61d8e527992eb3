//! "Smart" player: clears the first adjacent pair when the stick count is odd.

use tracing::trace;

use crate::board::Board;
use crate::core::{GameRng, Move};

use super::random::RandomStrategy;
use super::Strategy;

/// Greedy pair player.
///
/// With an odd number of sticks left it marks the first two adjacent
/// unmarked sticks (rows top to bottom, left to right), keeping the total
/// odd for the opponent. Otherwise, or when no pair exists, it plays like
/// [`RandomStrategy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPairStrategy {
    fallback: RandomStrategy,
}

impl GreedyPairStrategy {
    /// First `(row, i)` with sticks `i` and `i + 1` both unmarked.
    #[must_use]
    pub fn first_pair(board: &Board) -> Option<Move> {
        board.rows().find_map(|(row, sticks)| {
            sticks
                .windows(2)
                .position(|pair| pair[0].is_unmarked() && pair[1].is_unmarked())
                .map(|i| Move::new(row, i + 1, i + 2))
        })
    }
}

impl Strategy for GreedyPairStrategy {
    fn name(&self) -> &'static str {
        "Smart"
    }

    fn produce_move(&self, board: &Board, rng: &mut GameRng) -> Option<Move> {
        if board.unmarked_count() % 2 == 1 {
            if let Some(mv) = Self::first_pair(board) {
                trace!(%mv, "greedy pair");
                return Some(mv);
            }
        }
        self.fallback.produce_move(board, rng)
    }
}
