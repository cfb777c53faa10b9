use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::settings::THRESHOLD_TOOLTIP;

/// Render status bar with the field hint and control keys
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(56)])
        .split(area);

    // Left side: validity, tooltip of the selected field, store location
    let mut spans = Vec::new();
    if !app.dialog.can_close() {
        spans.push(Span::styled(
            format!("⚠ Alarm threshold invalid: {} ", THRESHOLD_TOOLTIP),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if let Some(tooltip) = app.selected_field.tooltip() {
        spans.push(Span::styled(format!("{} ", tooltip), Style::default().fg(Color::Cyan)));
    } else {
        spans.push(Span::styled(app.status_message.as_str(), Style::default().fg(Color::White)));
    }
    spans.push(Span::styled(
        format!(" | {}", app.settings_location),
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(status, chunks[0]);

    // Right side: Control hints
    let controls = Paragraph::new(Line::from(vec![
        Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(" Next ", Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(" ^S ", Style::default().fg(Color::Black).bg(Color::Green)),
        Span::styled(" OK ", Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Red)),
        Span::styled(" Cancel ", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled(" F1 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(" Help ", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(controls, chunks[1]);
}
