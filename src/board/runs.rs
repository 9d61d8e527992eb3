//! Runs: maximal spans of unmarked sticks within a row.
//!
//! Runs are never stored. `RunScanner` derives them from a board snapshot,
//! and `RunSummary` folds one full scan into the statistics the optimal
//! strategy decides on:
//!
//! - how many runs are longer than one stick ("big" runs) and how many are
//!   single sticks
//! - the last big run and the last single seen in scan order (rows top to
//!   bottom, left to right within a row)
//! - the Nim-sum: XOR of every run length on the board

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, OutOfRange};

use super::grid::{Board, Stick};

/// Runs found in one row. Most rows hold only a handful.
pub type RowRuns = SmallVec<[Run; 4]>;

/// A maximal inclusive span `left..=right` of unmarked sticks in `row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub row: usize,
    pub left: usize,
    pub right: usize,
}

impl Run {
    /// Number of sticks in the run.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// A run of exactly one stick.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.left == self.right
    }

    /// Move marking only the leftmost stick of the run.
    #[must_use]
    pub const fn take_one(&self) -> Move {
        Move::single(self.row, self.left)
    }

    /// Move marking sticks from the left until `keep` remain.
    ///
    /// `keep` must be smaller than the run length.
    #[must_use]
    pub fn trim_to(&self, keep: usize) -> Move {
        debug_assert!(keep < self.len(), "trim must remove at least one stick");
        let remove = self.len() - keep;
        Move::new(self.row, self.left, self.left + remove - 1)
    }
}

/// Read-only run view over a board.
#[derive(Clone, Copy, Debug)]
pub struct RunScanner<'a> {
    board: &'a Board,
}

impl<'a> RunScanner<'a> {
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Runs of one row, left to right.
    pub fn runs_of(&self, row: usize) -> Result<RowRuns, OutOfRange> {
        self.board
            .row(row)
            .map(|sticks| scan_row(row, sticks))
            .ok_or(OutOfRange::Row {
                row,
                rows: self.board.row_count(),
            })
    }

    /// Single-stick runs of one row.
    pub fn singles_of(&self, row: usize) -> Result<RowRuns, OutOfRange> {
        let mut runs = self.runs_of(row)?;
        runs.retain(|run| run.is_single());
        Ok(runs)
    }

    /// Runs longer than one stick in one row.
    pub fn multi_runs_of(&self, row: usize) -> Result<RowRuns, OutOfRange> {
        let mut runs = self.runs_of(row)?;
        runs.retain(|run| !run.is_single());
        Ok(runs)
    }

    /// Every run on the board in scan order.
    pub fn runs(&self) -> impl Iterator<Item = Run> + 'a {
        self.board
            .rows()
            .flat_map(|(row, sticks)| scan_row(row, sticks))
    }

    /// Fold a full scan into a summary.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        self.runs().collect()
    }
}

/// Emit a run each time an unmarked span is closed by a marked stick or by
/// the row's right edge.
fn scan_row(row: usize, sticks: &[Stick]) -> RowRuns {
    let mut runs = RowRuns::new();
    let mut start = None;

    for (i, stick) in sticks.iter().enumerate() {
        match (stick.is_unmarked(), start) {
            (true, None) => start = Some(i + 1),
            (false, Some(left)) => {
                runs.push(Run { row, left, right: i });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(left) = start {
        runs.push(Run { row, left, right: sticks.len() });
    }

    runs
}

/// Immutable statistics of one board scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    runs: Vec<Run>,
    big_count: usize,
    single_count: usize,
    last_big: Option<Run>,
    last_single: Option<Run>,
    nim_sum: usize,
}

impl FromIterator<Run> for RunSummary {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        let mut summary = RunSummary::default();
        for run in iter {
            if run.is_single() {
                summary.single_count += 1;
                summary.last_single = Some(run);
            } else {
                summary.big_count += 1;
                summary.last_big = Some(run);
            }
            summary.nim_sum ^= run.len();
            summary.runs.push(run);
        }
        summary
    }
}

impl RunSummary {
    /// All runs in scan order.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Runs longer than one stick.
    #[must_use]
    pub fn big_count(&self) -> usize {
        self.big_count
    }

    /// Runs of exactly one stick.
    #[must_use]
    pub fn single_count(&self) -> usize {
        self.single_count
    }

    #[must_use]
    pub fn last_big(&self) -> Option<Run> {
        self.last_big
    }

    #[must_use]
    pub fn last_single(&self) -> Option<Run> {
        self.last_single
    }

    /// XOR of all run lengths.
    #[must_use]
    pub fn nim_sum(&self) -> usize {
        self.nim_sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(row: usize, left: usize, right: usize) -> Run {
        Run { row, left, right }
    }

    #[test]
    fn test_fresh_row_is_one_run() {
        let board = Board::new(&[4]);
        let runs = RunScanner::new(&board).runs_of(1).unwrap();
        assert_eq!(runs.as_slice(), &[run(1, 1, 4)]);
    }

    #[test]
    fn test_marked_sticks_split_runs() {
        let mut board = Board::new(&[7]);
        board.apply_move(&Move::single(1, 2)).unwrap();
        board.apply_move(&Move::new(1, 4, 5)).unwrap();

        let scanner = RunScanner::new(&board);
        assert_eq!(
            scanner.runs_of(1).unwrap().as_slice(),
            &[run(1, 1, 1), run(1, 3, 3), run(1, 6, 7)]
        );
        assert_eq!(
            scanner.singles_of(1).unwrap().as_slice(),
            &[run(1, 1, 1), run(1, 3, 3)]
        );
        assert_eq!(scanner.multi_runs_of(1).unwrap().as_slice(), &[run(1, 6, 7)]);
    }

    #[test]
    fn test_fully_marked_row_has_no_runs() {
        let mut board = Board::new(&[2, 1]);
        board.apply_move(&Move::new(1, 1, 2)).unwrap();
        assert!(RunScanner::new(&board).runs_of(1).unwrap().is_empty());
    }

    #[test]
    fn test_runs_of_missing_row() {
        let board = Board::new(&[2]);
        let scanner = RunScanner::new(&board);
        let err = scanner.runs_of(2).unwrap_err();
        assert_eq!(err, OutOfRange::Row { row: 2, rows: 1 });
        assert_eq!(err.to_string(), "row 2 does not exist (board has 1 rows)");
        assert_eq!(scanner.singles_of(0), Err(OutOfRange::Row { row: 0, rows: 1 }));
    }

    #[test]
    fn test_summary_counts_and_last_seen() {
        let mut board = Board::new(&[1, 3, 5]);
        board.apply_move(&Move::single(3, 3)).unwrap();

        let summary = RunScanner::new(&board).summary();
        assert_eq!(summary.runs().len(), 4);
        assert_eq!(summary.single_count(), 1);
        assert_eq!(summary.big_count(), 3);
        assert_eq!(summary.last_single(), Some(run(1, 1, 1)));
        assert_eq!(summary.last_big(), Some(run(3, 4, 5)));
        assert_eq!(summary.nim_sum(), 1 ^ 3 ^ 2 ^ 2);
    }

    #[test]
    fn test_summary_of_empty_board() {
        let mut board = Board::new(&[2]);
        board.apply_move(&Move::new(1, 1, 2)).unwrap();

        let summary = RunScanner::new(&board).summary();
        assert_eq!(summary, RunSummary::default());
        assert_eq!(summary.last_single(), None);
    }

    #[test]
    fn test_trim_to() {
        let r = run(2, 3, 7);
        assert_eq!(r.len(), 5);
        assert_eq!(r.trim_to(0), Move::new(2, 3, 7));
        assert_eq!(r.trim_to(1), Move::new(2, 3, 6));
        assert_eq!(r.trim_to(4), Move::new(2, 3, 3));
        assert_eq!(r.take_one(), Move::single(2, 3));
    }
}
