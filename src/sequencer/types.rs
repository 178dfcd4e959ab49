//! Sequencer phase, screen snapshot, and presenter seam.

use crate::content::ContentStore;
use crate::error::Result;
use crate::line_buffer::LineBuffer;
use crate::panels::PanelBoard;

/// Stage of a boot or loader run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the user to press enter.
    Idle,
    Intro,
    Streaming,
    Steps,
    Finalizing,
    Unlocked,
    /// Log viewport hidden; the main surface owns the screen.
    Hidden,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Intro => "intro",
            Phase::Streaming => "streaming",
            Phase::Steps => "steps",
            Phase::Finalizing => "finalizing",
            Phase::Unlocked => "unlocked",
            Phase::Hidden => "hidden",
        }
    }
}

/// Everything a presenter needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    pub phase: Phase,
    pub log: &'a LineBuffer,
    /// Live line under the log, e.g. an animating progress bar.
    pub status: Option<&'a str>,
    pub panels: &'a PanelBoard,
    pub content: &'a ContentStore,
}

/// Draws sequencer state somewhere.
pub trait Presenter {
    fn present(&mut self, screen: &Screen<'_>) -> Result<()>;
}

impl Presenter for () {
    fn present(&mut self, _screen: &Screen<'_>) -> Result<()> {
        Ok(())
    }
}

/// Summary of one finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub lines_emitted: u64,
    pub bars_animated: u32,
    pub bars_shortcut: u32,
    /// Panel revealed at the end of a loader run, if it existed.
    pub panel_shown: Option<String>,
}
