use bootseq::sequencer::Screen;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the "press enter" screen shown before the first boot.
pub fn draw_enter_prompt(frame: &mut Frame, area: Rect) {
    let height = 5.min(area.height);
    let y = area.y + area.height.saturating_sub(height) / 2;
    let prompt_area = Rect::new(area.x, y, area.width, height);

    let lines = vec![
        Line::from(Span::styled(
            "TranquilOS",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Press ENTER to boot ]",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        prompt_area,
    );
}

/// Draws the scrolling boot log, bottom-anchored, with the live status line
/// (progress bar) underneath when one is active.
pub fn draw_log_viewport(frame: &mut Frame, area: Rect, screen: &Screen<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" boot :: {} ", screen.phase.label()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (log_area, status_area) = match screen.status {
        Some(_) if inner.height > 1 => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(inner);
            (chunks[0], Some(chunks[1]))
        }
        _ => (inner, None),
    };

    let lines: Vec<Line> = screen
        .log
        .tail(log_area.height as usize)
        .map(|line| styled_log_line(&line.text))
        .collect();
    frame.render_widget(Paragraph::new(lines), log_area);

    if let (Some(area), Some(status)) = (status_area, screen.status) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {status}"),
                Style::default().fg(Color::Cyan),
            ))),
            area,
        );
    }
}

fn styled_log_line(text: &str) -> Line<'static> {
    let style = if text.starts_with("[ OK ]") {
        Style::default().fg(Color::Green)
    } else if text.starts_with("> System") || text.starts_with("> Awaiting") {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if text.starts_with('>') {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(Span::styled(text.to_string(), style))
}
