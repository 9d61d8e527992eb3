//! Move strategies and player kinds.
//!
//! Strategies are trait-based so the competition can treat every computer
//! player the same way:
//! - `RandomStrategy`: rejection-sampled random moves
//! - `GreedyPairStrategy`: clears adjacent pairs on odd stick counts
//! - `OptimalHeuristicStrategy`: Nim-sum play with misère end-game rules
//!
//! Human players have no strategy; their moves come from a
//! [`MoveSource`](crate::game::MoveSource).

mod greedy;
mod heuristic;
mod random;

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::core::{GameRng, Move, UnknownPlayerKind};

pub use greedy::GreedyPairStrategy;
pub use heuristic::OptimalHeuristicStrategy;
pub use random::RandomStrategy;

/// A computer player's move rule.
///
/// Strategies never mutate the board. Given a board with at least one
/// unmarked stick they must return a move `Board::apply_move` accepts;
/// `None` is reserved for an empty board.
pub trait Strategy: Send + Sync {
    /// Display name used in transcripts.
    fn name(&self) -> &'static str;

    /// Choose a move for the player to act.
    fn produce_move(&self, board: &Board, rng: &mut GameRng) -> Option<Move>;
}

/// The four kinds of player a competition seat can hold.
#[derive(Clone, Copy, Debug)]
pub enum PlayerKind {
    Random(RandomStrategy),
    Heuristic(OptimalHeuristicStrategy),
    Smart(GreedyPairStrategy),
    Human,
}

impl PlayerKind {
    /// Look up a kind by its numeric code: 1 Random, 2 Heuristic,
    /// 3 Smart, 4 Human.
    pub fn from_code(code: u32) -> Result<Self, UnknownPlayerKind> {
        match code {
            1 => Ok(Self::random()),
            2 => Ok(Self::heuristic()),
            3 => Ok(Self::smart()),
            4 => Ok(Self::Human),
            other => Err(UnknownPlayerKind(other.to_string())),
        }
    }

    #[must_use]
    pub fn random() -> Self {
        Self::Random(RandomStrategy)
    }

    #[must_use]
    pub fn heuristic() -> Self {
        Self::Heuristic(OptimalHeuristicStrategy)
    }

    #[must_use]
    pub fn smart() -> Self {
        Self::Smart(GreedyPairStrategy::default())
    }

    /// The strategy behind a computer player, `None` for humans.
    #[must_use]
    pub fn strategy(&self) -> Option<&dyn Strategy> {
        match self {
            Self::Random(s) => Some(s),
            Self::Heuristic(s) => Some(s),
            Self::Smart(s) => Some(s),
            Self::Human => None,
        }
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Display name used in transcripts.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.strategy().map_or("Human", |s| s.name())
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either a numeric code or a case-insensitive name.
impl FromStr for PlayerKind {
    type Err = UnknownPlayerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u32>() {
            return Self::from_code(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::random()),
            "heuristic" | "optimal" => Ok(Self::heuristic()),
            "smart" | "greedy" => Ok(Self::smart()),
            "human" => Ok(Self::Human),
            _ => Err(UnknownPlayerKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(PlayerKind::from_code(1).unwrap().name(), "Random");
        assert_eq!(PlayerKind::from_code(2).unwrap().name(), "Heuristic");
        assert_eq!(PlayerKind::from_code(3).unwrap().name(), "Smart");
        assert!(PlayerKind::from_code(4).unwrap().is_human());
        assert_eq!(
            PlayerKind::from_code(5).unwrap_err(),
            UnknownPlayerKind("5".to_string())
        );
        assert!(PlayerKind::from_code(0).is_err());
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!("human".parse::<PlayerKind>().unwrap().name(), "Human");
        assert_eq!("Smart".parse::<PlayerKind>().unwrap().name(), "Smart");
        assert_eq!("2".parse::<PlayerKind>().unwrap().name(), "Heuristic");
        assert!("robot".parse::<PlayerKind>().is_err());
        assert!("-1".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_human_has_no_strategy() {
        assert!(PlayerKind::Human.strategy().is_none());
        assert!(PlayerKind::random().strategy().is_some());
        assert_eq!(PlayerKind::Human.to_string(), "Human");
    }
}
