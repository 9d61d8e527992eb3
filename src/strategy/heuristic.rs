//! Optimal misère play from the Nim-sum of run lengths.
//!
//! Every run is a Nim pile: removing a contiguous range from a run of `n`
//! leaves two runs `a` and `b` with `a + b < n`, so `a ^ b < n` and every
//! smaller single pile is reachable. A run's Grundy value is its length and
//! normal-play positions are decided by the XOR of all run lengths.
//!
//! Misère play only diverges once no more than one run longer than a
//! single stick is left:
//!
//! - no big run: the player to move loses iff an odd number of singles
//!   remains, and can only ever take one stick
//! - one big run: cut it to 0 or 1 sticks so an odd number of singles is
//!   left for the opponent
//! - two or more big runs: play the normal Nim-sum move. A balanced
//!   position with a big run always holds at least two of them, so the
//!   opponent can never reach an all-singles position from it

use tracing::trace;

use crate::board::{Board, RunScanner, RunSummary};
use crate::core::{GameRng, Move};

use super::Strategy;

/// Heuristic (optimal) player.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimalHeuristicStrategy;

impl OptimalHeuristicStrategy {
    /// Pick a move from a scan summary. `None` only for an empty board.
    #[must_use]
    pub fn choose(summary: &RunSummary) -> Option<Move> {
        match summary.big_count() {
            0 => summary.last_single().map(|single| single.take_one()),
            1 => {
                let big = summary.last_big()?;
                let keep = if summary.single_count() % 2 == 0 { 1 } else { 0 };
                Some(big.trim_to(keep))
            }
            _ => Self::balance(summary),
        }
    }

    /// Nim-sum move with two or more big runs on the board.
    fn balance(summary: &RunSummary) -> Option<Move> {
        let nim_sum = summary.nim_sum();

        // Already balanced: every move loses against best play.
        if nim_sum == 0 {
            return summary.last_big().map(|big| big.take_one());
        }

        // Only the parity bit is off; dropping a single flips it.
        if nim_sum == 1 {
            if let Some(single) = summary.last_single() {
                return Some(single.take_one());
            }
        }

        let top_bit: usize = 1 << nim_sum.ilog2();
        let run = summary
            .runs()
            .iter()
            .find(|run| run.len() & top_bit != 0)?;
        Some(run.trim_to(run.len() ^ nim_sum))
    }
}

impl Strategy for OptimalHeuristicStrategy {
    fn name(&self) -> &'static str {
        "Heuristic"
    }

    fn produce_move(&self, board: &Board, _rng: &mut GameRng) -> Option<Move> {
        let summary = RunScanner::new(board).summary();
        let mv = Self::choose(&summary);
        trace!(
            big = summary.big_count(),
            singles = summary.single_count(),
            nim_sum = summary.nim_sum(),
            mv = ?mv,
            "heuristic move"
        );
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &Board) -> Move {
        OptimalHeuristicStrategy
            .produce_move(board, &mut GameRng::new(0))
            .expect("board has sticks left")
    }

    #[test]
    fn test_single_row_of_three_leaves_one() {
        let mut board = Board::new(&[3]);
        let mv = play(&board);
        assert_eq!(mv, Move::new(1, 1, 2));

        board.apply_move(&mv).unwrap();
        assert_eq!(board.unmarked_count(), 1);
        assert_eq!(board.is_unmarked(1, 3), Ok(true));
    }

    #[test]
    fn test_two_singles_takes_last_scanned() {
        let board = Board::new(&[1, 1]);
        assert_eq!(play(&board), Move::single(2, 1));
    }

    #[test]
    fn test_one_big_run_with_odd_singles_clears_it() {
        let board = Board::new(&[1, 4]);
        assert_eq!(play(&board), Move::new(2, 1, 4));
    }

    #[test]
    fn test_one_big_run_with_even_singles_leaves_one() {
        let board = Board::new(&[1, 1, 4]);
        assert_eq!(play(&board), Move::new(3, 1, 3));
    }

    #[test]
    fn test_multi_pile_balances_nim_sum() {
        // 3 ^ 5 = 6: the 5-run holds the top bit and goes to 5 ^ 6 = 3.
        let mut board = Board::new(&[3, 5]);
        let mv = play(&board);
        assert_eq!(mv, Move::new(2, 1, 2));

        board.apply_move(&mv).unwrap();
        assert_eq!(RunScanner::new(&board).summary().nim_sum(), 0);
    }

    #[test]
    fn test_parity_bit_prefers_single() {
        // 2 ^ 3 ^ 1 ^ 1 = 1
        let board = Board::new(&[2, 3, 1, 1]);
        assert_eq!(play(&board), Move::single(4, 1));
    }

    #[test]
    fn test_parity_bit_without_single_shortens_odd_run() {
        // 2 ^ 3 = 1 with no singles: the 3-run drops to 2.
        let board = Board::new(&[2, 3]);
        assert_eq!(play(&board), Move::new(2, 1, 1));
    }

    #[test]
    fn test_parity_bit_picks_first_odd_run_not_last_run() {
        // 3 ^ 2 ^ 2 ^ 2 = 1: shortening the last 2-run would leave 3 ^ 2 ^ 2 ^ 1.
        let mut board = Board::new(&[3, 2, 2, 2]);
        let mv = play(&board);
        assert_eq!(mv, Move::single(1, 1));

        board.apply_move(&mv).unwrap();
        assert_eq!(RunScanner::new(&board).summary().nim_sum(), 0);
    }

    #[test]
    fn test_balanced_position_takes_one_from_last_big_run() {
        let board = Board::new(&[1, 3, 2]);
        assert_eq!(RunScanner::new(&board).summary().nim_sum(), 0);
        assert_eq!(play(&board), Move::single(3, 1));
    }

    #[test]
    fn test_runs_in_same_row_are_separate_piles() {
        // Row 1: runs of 2 and 2, row 2: a run of 3. 2 ^ 2 ^ 3 = 3, and the
        // first run with bit 2 set goes to 2 ^ 3 = 1.
        let mut board = Board::new(&[5, 3]);
        board.apply_move(&Move::single(1, 3)).unwrap();
        let mv = play(&board);
        assert_eq!(mv, Move::single(1, 1));

        board.apply_move(&mv).unwrap();
        assert_eq!(RunScanner::new(&board).summary().nim_sum(), 0);
    }

    #[test]
    fn test_empty_board() {
        let mut board = Board::new(&[2]);
        board.apply_move(&Move::new(1, 1, 2)).unwrap();
        assert_eq!(OptimalHeuristicStrategy.produce_move(&board, &mut GameRng::new(0)), None);
    }
}
