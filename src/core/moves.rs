//! Move representation: one row plus an inclusive range of stick indices.
//!
//! All indices are 1-based. A move is a pure value; whether it is legal
//! depends on the board it is applied to (see `Board::apply_move`).
//!
//! The canonical text form is `"<row>:<left>-<right>"`:
//!
//! ```
//! use misere_nim::core::Move;
//!
//! let mv = Move::new(2, 3, 5);
//! assert_eq!(mv.to_string(), "2:3-5");
//! assert_eq!("2:3-5".parse::<Move>().unwrap(), mv);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MoveParseError;

/// Marks sticks `left..=right` of `row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row the move applies to (1-based).
    pub row: usize,
    /// Leftmost stick to mark (1-based, inclusive).
    pub left: usize,
    /// Rightmost stick to mark (1-based, inclusive).
    pub right: usize,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(row: usize, left: usize, right: usize) -> Self {
        Self { row, left, right }
    }

    /// A move marking exactly one stick.
    #[must_use]
    pub const fn single(row: usize, index: usize) -> Self {
        Self::new(row, index, index)
    }

    /// Number of sticks covered, or 0 for an inverted range.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.right >= self.left {
            self.right - self.left + 1
        } else {
            0
        }
    }

    /// Check if the range is empty (inverted bounds).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `index` of `row` lies inside this move.
    #[must_use]
    pub const fn covers(&self, row: usize, index: usize) -> bool {
        self.row == row && self.left <= index && index <= self.right
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.row, self.left, self.right)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || MoveParseError::Malformed(trimmed.to_string());

        let (row, range) = trimmed.split_once(':').ok_or_else(malformed)?;
        let (left, right) = range.split_once('-').ok_or_else(malformed)?;

        let number = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| MoveParseError::Number(part.to_string()))
        };

        Ok(Self::new(number(row)?, number(left)?, number(right)?))
    }
}
