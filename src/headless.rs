//! Plain-text presenter for non-interactive runs.
//!
//! Prints every log line exactly once, as soon as it appears. Live status
//! frames (animating bars) are not printed; the finished bar is a regular
//! log line and shows up with the rest.

use std::io::Write;

use crate::content::ContentStore;
use crate::error::Result;
use crate::sequencer::{Presenter, Screen};

pub struct HeadlessPresenter<W: Write> {
    out: W,
    next_seq: u64,
}

impl<W: Write> HeadlessPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, next_seq: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one panel's title and body.
    pub fn print_panel(&mut self, content: &ContentStore, key: &str) -> Result<()> {
        if let Some(panel) = content.panel(key) {
            writeln!(self.out, "== {} ==", panel.title)?;
            for line in &panel.body {
                writeln!(self.out, "{line}")?;
            }
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for HeadlessPresenter<W> {
    fn present(&mut self, screen: &Screen<'_>) -> Result<()> {
        for line in screen.log.since(self.next_seq) {
            writeln!(self.out, "{}", line.text)?;
        }
        self.next_seq = screen.log.next_seq();
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::BootConfig;
    use crate::sequencer::Sequencer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_prints_each_line_once() {
        let config = BootConfig::default().fast();
        let mut seq = Sequencer::new(
            config,
            ManualClock::new(),
            StdRng::seed_from_u64(11),
            HeadlessPresenter::new(Vec::new()),
        );

        let report = seq.run_boot().await.unwrap();
        let output = String::from_utf8(seq.into_presenter().into_inner()).unwrap();

        assert_eq!(output.lines().count() as u64, report.lines_emitted);
        assert!(output.starts_with("> Booting"));
        assert!(output.contains("> System unlocked."));
    }

    #[test]
    fn test_print_panel() {
        let config = BootConfig::default();
        let mut presenter = HeadlessPresenter::new(Vec::new());
        presenter.print_panel(&config.content, "contact").unwrap();
        presenter.print_panel(&config.content, "missing").unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.starts_with("== Contact =="));
        assert_eq!(output.matches("==").count(), 2);
    }
}
