//! Stick board: rows of positions that are marked at most once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, InvalidMove, Move, OutOfRange};

/// State of one position in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stick {
    Unmarked,
    Marked,
}

impl Stick {
    #[must_use]
    pub const fn is_unmarked(self) -> bool {
        matches!(self, Stick::Unmarked)
    }
}

/// The game board.
///
/// The shape is fixed at construction. Positions only ever go from
/// `Unmarked` to `Marked`, and only through [`Board::apply_move`].
///
/// ```
/// use misere_nim::board::Board;
/// use misere_nim::core::Move;
///
/// let mut board = Board::new(&[1, 3]);
/// assert_eq!(board.unmarked_count(), 4);
///
/// board.apply_move(&Move::new(2, 1, 2)).unwrap();
/// assert_eq!(board.unmarked_count(), 2);
/// assert_eq!(board.is_unmarked(2, 3), Ok(true));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: Vec<Vec<Stick>>,
    unmarked: usize,
}

impl Board {
    /// Create a fully unmarked board with the given row lengths.
    #[must_use]
    pub fn new(row_lengths: &[usize]) -> Self {
        Self {
            rows: row_lengths
                .iter()
                .map(|&len| vec![Stick::Unmarked; len])
                .collect(),
            unmarked: row_lengths.iter().sum(),
        }
    }

    /// Create a fresh board from a layout.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(&config.rows)
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of a row (1-based), or `None` if the row does not exist.
    #[must_use]
    pub fn row_length(&self, row: usize) -> Option<usize> {
        self.row(row).map(<[Stick]>::len)
    }

    /// The positions of a row (1-based), left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Stick]> {
        row.checked_sub(1)
            .and_then(|r| self.rows.get(r))
            .map(Vec::as_slice)
    }

    /// Iterate over `(row number, positions)` pairs, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[Stick])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, sticks)| (i + 1, sticks.as_slice()))
    }

    /// Check whether a stick is still in play.
    pub fn is_unmarked(&self, row: usize, index: usize) -> Result<bool, OutOfRange> {
        let sticks = self.row(row).ok_or(OutOfRange::Row {
            row,
            rows: self.row_count(),
        })?;
        index
            .checked_sub(1)
            .and_then(|i| sticks.get(i))
            .map(|stick| stick.is_unmarked())
            .ok_or(OutOfRange::Stick { row, index })
    }

    /// Total unmarked sticks. Zero means the round is over.
    #[must_use]
    pub fn unmarked_count(&self) -> usize {
        self.unmarked
    }

    /// Check that `mv` could be applied, without touching the board.
    pub fn validate_move(&self, mv: &Move) -> Result<(), InvalidMove> {
        let sticks = self.row(mv.row).ok_or(InvalidMove::RowOutOfRange {
            row: mv.row,
            rows: self.row_count(),
        })?;

        let len = sticks.len();
        for index in [mv.left, mv.right] {
            if index == 0 || index > len {
                return Err(InvalidMove::IndexOutOfRange {
                    row: mv.row,
                    index,
                    len,
                });
            }
        }

        if mv.left > mv.right {
            return Err(InvalidMove::EmptyOrInverted {
                left: mv.left,
                right: mv.right,
            });
        }

        match (mv.left..=mv.right).find(|&i| !sticks[i - 1].is_unmarked()) {
            Some(index) => Err(InvalidMove::AlreadyMarked { row: mv.row, index }),
            None => Ok(()),
        }
    }

    /// Mark every stick of `mv`.
    ///
    /// The move is validated in full first; on error the board is left
    /// untouched.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), InvalidMove> {
        self.validate_move(mv)?;

        let sticks = &mut self.rows[mv.row - 1];
        for stick in &mut sticks[mv.left - 1..mv.right] {
            *stick = Stick::Marked;
        }
        self.unmarked -= mv.len();
        Ok(())
    }
}

impl From<&BoardConfig> for Board {
    fn from(config: &BoardConfig) -> Self {
        Self::from_config(config)
    }
}

/// One line per row: the row number, then `|` for each unmarked stick and
/// `.` for each marked one.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, sticks) in self.rows() {
            write!(f, "{row}:")?;
            for stick in sticks {
                f.write_str(if stick.is_unmarked() { " |" } else { " ." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
