//! Boot/loader state machine.
//!
//! The sequencer owns the line buffer, panel board, clock, RNG, and presenter
//! for its whole lifetime and lends them to each phase in turn.

mod logic;
mod types;

pub use logic::Sequencer;
pub use types::{Phase, Presenter, RunReport, Screen};
