//! Round observers: the play-by-play side channel of a competition.

use std::io::{self, Write};

use crate::board::Board;
use crate::core::{InvalidMove, Move, PlayerId};

/// Hooks called while a round is played. Every hook defaults to a no-op.
pub trait RoundObserver {
    fn round_started(&mut self, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    /// Called once per turn, not again after a rejected move.
    fn turn_started(&mut self, _player: PlayerId) -> io::Result<()> {
        Ok(())
    }

    fn move_made(&mut self, _player: PlayerId, _mv: &Move) -> io::Result<()> {
        Ok(())
    }

    fn invalid_move(&mut self, _player: PlayerId, _mv: &Move, _reason: &InvalidMove) -> io::Result<()> {
        Ok(())
    }

    fn round_won(&mut self, _winner: PlayerId) -> io::Result<()> {
        Ok(())
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl RoundObserver for Silent {}

/// Writes the classic text transcript.
///
/// ```text
/// Welcome to the sticks game!
/// Player 1, it is now your turn!
/// Player 1 made the move: 5:1-9
/// ...
/// Player 2 won!
/// ```
pub struct TextTranscript<W> {
    out: W,
}

impl<W: Write> TextTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RoundObserver for TextTranscript<W> {
    fn round_started(&mut self, _board: &Board) -> io::Result<()> {
        writeln!(self.out, "Welcome to the sticks game!")
    }

    fn turn_started(&mut self, player: PlayerId) -> io::Result<()> {
        writeln!(self.out, "{player}, it is now your turn!")
    }

    fn move_made(&mut self, player: PlayerId, mv: &Move) -> io::Result<()> {
        writeln!(self.out, "{player} made the move: {mv}")
    }

    fn invalid_move(&mut self, _player: PlayerId, _mv: &Move, _reason: &InvalidMove) -> io::Result<()> {
        writeln!(self.out, "Invalid move. Enter another:")
    }

    fn round_won(&mut self, winner: PlayerId) -> io::Result<()> {
        writeln!(self.out, "{winner} won!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_lines() {
        let mut transcript = TextTranscript::new(Vec::new());
        let board = Board::new(&[1]);

        transcript.round_started(&board).unwrap();
        transcript.turn_started(PlayerId::FIRST).unwrap();
        transcript
            .invalid_move(
                PlayerId::FIRST,
                &Move::new(1, 2, 1),
                &InvalidMove::EmptyOrInverted { left: 2, right: 1 },
            )
            .unwrap();
        transcript.move_made(PlayerId::FIRST, &Move::single(1, 1)).unwrap();
        transcript.round_won(PlayerId::SECOND).unwrap();

        let text = String::from_utf8(transcript.into_inner()).unwrap();
        assert_eq!(
            text,
            "Welcome to the sticks game!\n\
             Player 1, it is now your turn!\n\
             Invalid move. Enter another:\n\
             Player 1 made the move: 1:1-1\n\
             Player 2 won!\n"
        );
    }
}
