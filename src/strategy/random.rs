//! Rejection-sampled random moves.

use tracing::trace;

use crate::board::Board;
use crate::core::{GameRng, Move};

use super::Strategy;

/// Random player.
///
/// Not a uniform draw over legal moves: it picks a row with sticks left,
/// then an unmarked left stick in that row, then redraws a right stick
/// until `left..=right` is entirely unmarked. Each step is an unbounded
/// rejection loop that terminates almost surely while a stick is left.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    fn draw_row(board: &Board, rng: &mut GameRng) -> usize {
        loop {
            let row = rng.gen_index(board.row_count());
            if board
                .row(row)
                .is_some_and(|sticks| sticks.iter().any(|s| s.is_unmarked()))
            {
                return row;
            }
        }
    }

    fn draw_left(board: &Board, row: usize, len: usize, rng: &mut GameRng) -> usize {
        loop {
            let left = rng.gen_index(len);
            if board.is_unmarked(row, left) == Ok(true) {
                return left;
            }
        }
    }

    fn draw_right(board: &Board, row: usize, left: usize, len: usize, rng: &mut GameRng) -> usize {
        loop {
            let right = rng.gen_index(len);
            if right >= left && (left..=right).all(|i| board.is_unmarked(row, i) == Ok(true)) {
                return right;
            }
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn produce_move(&self, board: &Board, rng: &mut GameRng) -> Option<Move> {
        if board.unmarked_count() == 0 {
            return None;
        }

        let row = Self::draw_row(board, rng);
        let len = board.row_length(row)?;
        let left = Self::draw_left(board, row, len, rng);
        let right = Self::draw_right(board, row, left, len, rng);

        trace!(row, left, right, "random move");
        Some(Move::new(row, left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_move() {
        let mut board = Board::new(&[1]);
        board.apply_move(&Move::single(1, 1)).unwrap();
        assert_eq!(RandomStrategy.produce_move(&board, &mut GameRng::new(1)), None);
    }

    #[test]
    fn test_only_remaining_stick_is_found() {
        let mut board = Board::new(&[3, 4]);
        board.apply_move(&Move::new(1, 1, 3)).unwrap();
        board.apply_move(&Move::new(2, 1, 2)).unwrap();
        board.apply_move(&Move::single(2, 4)).unwrap();

        let mut rng = GameRng::new(9);
        for _ in 0..20 {
            assert_eq!(
                RandomStrategy.produce_move(&board, &mut rng),
                Some(Move::single(2, 3))
            );
        }
    }

    #[test]
    fn test_moves_are_legal() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            let mut board = Board::new(&[1, 3, 5, 7]);
            while let Some(mv) = RandomStrategy.produce_move(&board, &mut rng) {
                board.apply_move(&mv).unwrap();
            }
            assert_eq!(board.unmarked_count(), 0);
        }
    }

    #[test]
    fn test_draws_row_then_left_then_right() {
        // Row 1 offers one move and row 2 forty-five; rows are still drawn
        // evenly, then left evenly within the row, then right from left on.
        let board = Board::new(&[1, 9]);
        let mut rng = GameRng::new(2024);
        let draws = 10_000;

        let mut row_one = 0;
        let mut lefts = [0usize; 9];
        let mut rights_after_first = Vec::new();
        for _ in 0..draws {
            let mv = RandomStrategy.produce_move(&board, &mut rng).unwrap();
            if mv.row == 1 {
                assert_eq!(mv, Move::single(1, 1));
                row_one += 1;
                continue;
            }
            assert!(mv.left <= mv.right);
            lefts[mv.left - 1] += 1;
            if mv.left == 1 {
                rights_after_first.push(mv.right);
            }
        }

        assert!((4_500..=5_500).contains(&row_one), "row 1 drawn {row_one} times");

        let row_two = draws - row_one;
        let expected = row_two / 9;
        for (i, &count) in lefts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 4,
                "left {} drawn {count} times, expected about {expected}",
                i + 1
            );
        }

        let mean = rights_after_first.iter().sum::<usize>() as f64 / rights_after_first.len() as f64;
        assert!((mean - 5.0).abs() < 0.5, "mean right after left 1 was {mean}");
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new(&[5, 5, 5]);
        let a = RandomStrategy.produce_move(&board, &mut GameRng::new(11));
        let b = RandomStrategy.produce_move(&board, &mut GameRng::new(11));
        assert_eq!(a, b);
    }
}
