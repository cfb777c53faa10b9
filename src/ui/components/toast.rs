use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ToastType};

const TOAST_WIDTH: u16 = 50;
const TOAST_HEIGHT: u16 = 3;

/// Render toast notifications in the top-right corner, newest first
pub fn render_toasts(frame: &mut Frame, app: &App) {
    let area = frame.area();

    for (idx, toast) in app.toasts.iter().rev().take(3).enumerate() {
        let y_offset = idx as u16 * (TOAST_HEIGHT + 1) + 1;
        if y_offset + TOAST_HEIGHT > area.height {
            break;
        }

        let toast_area = Rect {
            x: area.width.saturating_sub(TOAST_WIDTH + 2),
            y: area.y + y_offset,
            width: TOAST_WIDTH.min(area.width),
            height: TOAST_HEIGHT,
        };

        let (color, icon) = match toast.toast_type {
            ToastType::Success => (Color::Green, "✓"),
            ToastType::Error => (Color::Red, "✗"),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(Color::Black));

        let text = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(toast.message.as_str(), Style::default().fg(Color::White)),
        ]))
        .block(block)
        .wrap(Wrap { trim: true });

        frame.render_widget(Clear, toast_area);
        frame.render_widget(text, toast_area);
    }
}
