use bootseq::content::{ContentStore, Panel};
use bootseq::input::detail_key;
use bootseq::panels::PanelBoard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the unlocked surface: command bar, active panel, footer.
pub fn draw_main_surface(
    frame: &mut Frame,
    area: Rect,
    panels: &PanelBoard,
    content: &ContentStore,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Command bar
            Constraint::Min(0),    // Active panel
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_command_bar(frame, chunks[0], panels, content);

    match panels.active_panel().and_then(|key| content.panel(key)) {
        Some(panel) => draw_panel(frame, chunks[1], panel, panels, content),
        None => draw_idle_panel(frame, chunks[1]),
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        " 1-9 run command   a-z expand log entry   q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[2]);
}

fn draw_command_bar(frame: &mut Frame, area: Rect, panels: &PanelBoard, content: &ContentStore) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" TranquilOS ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (index, panel) in content.panels.iter().enumerate() {
        let is_active = panels.active_panel() == Some(panel.key.as_str());
        let style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(format!(" [{}] {} ", index + 1, panel.title), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &Panel,
    panels: &PanelBoard,
    content: &ContentStore,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", panel.title));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = panel.body.iter().map(|l| Line::from(l.clone())).collect();

    // The logs panel lists expandable entries under its body
    if panel.key == "logs" {
        lines.push(Line::from(""));
        for (index, detail) in content.log_details.iter().enumerate() {
            let is_open = panels.active_detail() == Some(detail.role.as_str());
            let marker = if is_open { "v" } else { ">" };
            let key = detail_key(index).unwrap_or(' ');
            lines.push(Line::from(vec![
                Span::styled(format!("[{key}] "), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{marker} {}", detail.title),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
            if is_open {
                for body_line in &detail.body {
                    lines.push(Line::from(format!("    {body_line}")));
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_idle_panel(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "> Awaiting command...",
            Style::default().fg(Color::Green),
        ))),
        inner,
    );
}
