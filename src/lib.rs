//! bootseq - fake terminal boot sequence and per-panel loaders.
//!
//! This module exposes the animation core for testing and external use.

pub mod build_info;
pub mod clock;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod headless;
pub mod input;
pub mod line_buffer;
pub mod panels;
pub mod progress_bar;
pub mod sequencer;

pub use clock::{Clock, ManualClock, TokioClock};
pub use config::BootConfig;
pub use error::{BootError, Result};
pub use line_buffer::LineBuffer;
pub use sequencer::{Phase, Presenter, Sequencer};
