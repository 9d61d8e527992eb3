//! Core types: players, RNG, moves, configuration and errors.
//!
//! Nothing in here knows about sticks being marked; the board and the
//! strategies build on these values.

pub mod player;
pub mod rng;
pub mod moves;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use moves::Move;
pub use config::{BoardConfig, CompetitionConfig, DEFAULT_ROW_COUNT};
pub use error::{
    CompetitionError, ConfigError, InvalidMove, MoveParseError, OutOfRange, UnknownPlayerKind,
};
