//! Error types.
//!
//! Every error here is a local, recoverable condition returned to the
//! caller. Whether a rejected move means "ask the human again" or "a
//! strategy is broken" is decided by the competition layer.

use std::path::PathBuf;

use super::moves::Move;
use super::player::PlayerId;

/// A row or position lookup outside the board's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRange {
    #[error("row {row} does not exist (board has {rows} rows)")]
    Row { row: usize, rows: usize },

    #[error("position {row}:{index} is outside the board")]
    Stick { row: usize, index: usize },
}

/// Why a move was rejected by `Board::apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("row {row} does not exist (board has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("index {index} is outside row {row} of length {len}")]
    IndexOutOfRange { row: usize, index: usize, len: usize },

    #[error("range {left}-{right} is empty or inverted")]
    EmptyOrInverted { left: usize, right: usize },

    #[error("stick {row}:{index} is already marked")]
    AlreadyMarked { row: usize, index: usize },
}

/// Failure to parse the `"<row>:<left>-<right>"` move encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("expected <row>:<left>-<right>, got {0:?}")]
    Malformed(String),

    #[error("invalid number {0:?} in move")]
    Number(String),
}

/// Errors that can occur when loading a board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// An unsupported player selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown player type {0:?} (expected 1-4 or random|heuristic|smart|human)")]
pub struct UnknownPlayerKind(pub String);

/// Errors that end a competition early.
#[derive(Debug, thiserror::Error)]
pub enum CompetitionError {
    #[error("{player} ({strategy}) produced illegal move {mv}: {reason}")]
    IllegalStrategyMove {
        player: PlayerId,
        strategy: &'static str,
        mv: Move,
        reason: InvalidMove,
    },

    #[error("{player} ({strategy}) found no move on a board with sticks left")]
    NoMoveProduced {
        player: PlayerId,
        strategy: &'static str,
    },

    #[error("input closed while waiting for {0}'s move")]
    InputClosed(PlayerId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
