//! Where human moves come from.
//!
//! The competition never reads input itself. A seat holding
//! `PlayerKind::Human` asks its `MoveSource`, which may prompt a terminal,
//! replay a script, or refuse.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::board::Board;
use crate::core::{CompetitionError, Move, PlayerId};

/// Supplies moves for human seats.
///
/// Returned moves are not validated here; the competition rejects illegal
/// ones and asks again.
pub trait MoveSource {
    fn request_move(&mut self, player: PlayerId, board: &Board) -> Result<Move, CompetitionError>;
}

/// For competitions without human seats.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInput;

impl MoveSource for NoInput {
    fn request_move(&mut self, player: PlayerId, _board: &Board) -> Result<Move, CompetitionError> {
        Err(CompetitionError::InputClosed(player))
    }
}

/// Replays a fixed list of moves, then reports closed input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    moves: VecDeque<Move>,
}

impl ScriptedInput {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedInput {
    fn request_move(&mut self, player: PlayerId, _board: &Board) -> Result<Move, CompetitionError> {
        self.moves
            .pop_front()
            .ok_or(CompetitionError::InputClosed(player))
    }
}

/// Interactive prompt over any reader/writer pair.
///
/// Input is read as whitespace-separated tokens, so a whole move may be
/// typed on one line (`2 1 3 5`).
pub struct PromptedInput<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> PromptedInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, player: PlayerId) -> Result<String, CompetitionError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CompetitionError::InputClosed(player));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending
            .pop_front()
            .ok_or(CompetitionError::InputClosed(player))
    }

    fn ask_number(&mut self, player: PlayerId, prompt: &str) -> Result<usize, CompetitionError> {
        writeln!(self.writer, "{prompt}")?;
        loop {
            let token = self.next_token(player)?;
            match token.parse() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.writer, "Please enter a number:")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for PromptedInput<R, W> {
    fn request_move(&mut self, player: PlayerId, board: &Board) -> Result<Move, CompetitionError> {
        loop {
            writeln!(self.writer, "Press 1 to display the board. Press 2 to make a move:")?;
            match self.next_token(player)?.as_str() {
                "1" => write!(self.writer, "{board}")?,
                "2" => {
                    let row = self.ask_number(player, "Enter the row number:")?;
                    let left = self.ask_number(player, "Enter the index of the leftmost stick:")?;
                    let right = self.ask_number(player, "Enter the index of the rightmost stick:")?;
                    return Ok(Move::new(row, left, right));
                }
                _ => writeln!(self.writer, "Unsupported command")?,
            }
        }
    }
}
