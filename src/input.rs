//! Key → command mapping for the interactive surface.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sequencer::Phase;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the full boot (only from the enter screen).
    Boot,
    /// Run the loader for the panel at this index.
    RunCategory(usize),
    /// Expand the log detail at this index.
    ToggleDetail(usize),
    Quit,
}

/// Letters bound to log details, in order. 'q' quits, so it is left out.
const DETAIL_KEYS: &[u8] = b"abcdefghijklmnoprstuvwxyz";

/// Letter shown next to the log detail at `index`: a, b, c, ...
pub fn detail_key(index: usize) -> Option<char> {
    DETAIL_KEYS.get(index).map(|&b| char::from(b))
}

fn detail_index(c: char) -> Option<usize> {
    u8::try_from(c)
        .ok()
        .and_then(|b| DETAIL_KEYS.iter().position(|&k| k == b))
}

/// Maps a key press given the current phase. `logs_open` enables the
/// detail letters.
pub fn map_key(key: KeyEvent, phase: Phase, logs_open: bool) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter if phase == Phase::Idle => Some(Command::Boot),
        KeyCode::Char(c @ '1'..='9') if phase == Phase::Hidden => {
            Some(Command::RunCategory(c as usize - '1' as usize))
        }
        KeyCode::Char(c) if phase == Phase::Hidden && logs_open => {
            detail_index(c).map(Command::ToggleDetail)
        }
        _ => None,
    }
}
