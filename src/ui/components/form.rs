use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Dialog};
use crate::dialog::FieldStyle;
use crate::settings::SettingsField;
use crate::ui::utils::tail_offset;

/// Height of a single-line input including its border
const INPUT_HEIGHT: u16 = 3;

/// Lay the inputs out as a two-column grid with the message body below
pub fn field_areas(area: Rect) -> Vec<(SettingsField, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT), // Username | Password
            Constraint::Length(INPUT_HEIGHT), // Mail Server
            Constraint::Length(INPUT_HEIGHT), // To | Cc
            Constraint::Length(INPUT_HEIGHT), // Cc1 | Alarm Threshold
            Constraint::Min(3),               // Message
        ])
        .split(area);

    let columns = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };

    let row0 = columns(rows[0]);
    let row1 = columns(rows[1]);
    let row2 = columns(rows[2]);
    let row3 = columns(rows[3]);

    vec![
        (SettingsField::Username, row0[0]),
        (SettingsField::Password, row0[1]),
        (SettingsField::MailServer, row1[0]),
        (SettingsField::To, row2[0]),
        (SettingsField::Cc, row2[1]),
        (SettingsField::Cc1, row3[0]),
        (SettingsField::AlarmThreshold, row3[1]),
        (SettingsField::Message, rows[4]),
    ]
}

/// Render the configuration form
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    for (field, field_area) in field_areas(area) {
        render_input(frame, app, field, field_area);
    }
}

fn render_input(frame: &mut Frame, app: &App, field: SettingsField, area: Rect) {
    let is_selected = app.selected_field == field;
    let text = app.dialog.field_text(field);
    let shown = if field.is_masked() {
        "*".repeat(text.chars().count())
    } else {
        text.to_string()
    };

    let border_style = if is_selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Invalid threshold: white on red
    let text_style = if field == SettingsField::AlarmThreshold
        && app.dialog.threshold_style() == FieldStyle::Error
    {
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label()))
        .border_style(border_style);
    let inner = block.inner(area);

    // Keep the end of the text (where the cursor is) in view
    let lines: Vec<&str> = shown.split('\n').collect();
    let last_line_len = u16::try_from(lines.last().map(|l| l.chars().count()).unwrap_or(0))
        .unwrap_or(u16::MAX);
    let line_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let (scroll_y, scroll_x) = if field.is_multiline() {
        (line_count.saturating_sub(inner.height), 0)
    } else {
        (0, tail_offset(last_line_len, inner.width))
    };

    let input = Paragraph::new(shown.as_str())
        .style(text_style)
        .block(block)
        .scroll((scroll_y, scroll_x));
    frame.render_widget(input, area);

    if is_selected && app.popup == Dialog::None && inner.width > 0 && inner.height > 0 {
        let x = inner.x + last_line_len.saturating_sub(scroll_x).min(inner.width - 1);
        let y = inner.y + line_count.saturating_sub(1).saturating_sub(scroll_y).min(inner.height - 1);
        frame.set_cursor_position((x, y));
    }
}
