//! # misere-nim
//!
//! Misère Nim played on rows of sticks, with computer players of varying
//! strength and a competition runner.
//!
//! ## Rules
//!
//! A board holds rows of sticks. On a turn a player marks a contiguous
//! range of unmarked sticks within one row. Whoever marks the last stick
//! loses.
//!
//! ## Design Principles
//!
//! 1. **Runs, not rows**: A move can split a row, so every maximal run of
//!    unmarked sticks is its own Nim pile. `RunScanner` derives that view
//!    on demand and the strategies reason only about runs.
//!
//! 2. **Validate once, apply atomically**: `Board::apply_move` either
//!    marks the whole range or leaves the board untouched.
//!
//! 3. **Reproducible play**: All randomness flows through a seedable
//!    `GameRng`, forked per seat.
//!
//! ## Modules
//!
//! - `core`: Players, moves, RNG, configuration and errors
//! - `board`: The stick board and its run decomposition
//! - `strategy`: Random, greedy-pair and optimal heuristic players
//! - `analysis`: Exhaustive solver used to check the heuristic
//! - `game`: Competition loop, human input and transcripts

pub mod core;
pub mod board;
pub mod strategy;
pub mod analysis;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, CompetitionConfig, CompetitionError, ConfigError,
    GameRng, InvalidMove, Move, MoveParseError, OutOfRange,
    PlayerId, PlayerMap, UnknownPlayerKind,
};

pub use crate::board::{Board, Run, RunScanner, RunSummary, Stick};

pub use crate::strategy::{
    GreedyPairStrategy, OptimalHeuristicStrategy, PlayerKind, RandomStrategy, Strategy,
};

pub use crate::analysis::{Outcome, Solver};

pub use crate::game::{
    Competition, CompetitionResult, MoveSource, NoInput, PromptedInput,
    RoundObserver, RoundRecord, ScriptedInput, Silent, TextTranscript,
};
