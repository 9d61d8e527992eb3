//! The stick board and the run view derived from it.

mod grid;
mod runs;

pub use grid::{Board, Stick};
pub use runs::{RowRuns, Run, RunScanner, RunSummary};
