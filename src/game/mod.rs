//! Playing competitions: the round loop, human input and transcripts.

mod competition;
mod input;
mod transcript;

pub use competition::{Competition, CompetitionResult, RoundRecord};
pub use input::{MoveSource, NoInput, PromptedInput, ScriptedInput};
pub use transcript::{RoundObserver, Silent, TextTranscript};
