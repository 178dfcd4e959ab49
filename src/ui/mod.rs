mod boot_screen;
mod main_surface;
mod terminal;

use bootseq::error::Result;
use bootseq::sequencer::{Phase, Presenter, Screen};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};

pub use terminal::{restore_terminal, setup_terminal};

/// Picks what to draw from the sequencer's state.
pub fn draw(frame: &mut Frame, screen: &Screen<'_>) {
    let area = frame.size();

    if screen.phase == Phase::Idle {
        boot_screen::draw_enter_prompt(frame, area);
    } else if screen.panels.is_log_visible() {
        boot_screen::draw_log_viewport(frame, area, screen);
    } else if screen.panels.is_main_visible() {
        main_surface::draw_main_surface(frame, area, screen.panels, screen.content);
    }
}

/// Presents every frame to a ratatui terminal.
pub struct TuiPresenter<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TuiPresenter<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Presenter for TuiPresenter<B> {
    fn present(&mut self, screen: &Screen<'_>) -> Result<()> {
        self.terminal.draw(|frame| draw(frame, screen))?;
        Ok(())
    }
}
