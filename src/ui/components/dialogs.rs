use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Dialog};
use crate::settings::THRESHOLD_TOOLTIP;
use crate::ui::utils::{centered_rect, pad_rect};

/// Render popup overlay
pub fn render_dialog(frame: &mut Frame, app: &App) {
    let (area_size, title, content, style) = match &app.popup {
        Dialog::Help => {
            let key = |k: &'static str, what: &'static str| {
                Line::from(vec![
                    Span::styled(format!("  {:12}", k), Style::default().fg(Color::Yellow)),
                    Span::raw(what),
                ])
            };
            let help_content = vec![
                Line::from(""),
                Line::from(Span::styled("Editing", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
                Line::from(""),
                key("Tab / ↓", "Next field"),
                key("S-Tab / ↑", "Previous field"),
                key("Backspace", "Delete last character"),
                key("Enter", "Save (new line in the message)"),
                Line::from(""),
                Line::from(Span::styled("Dialog", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))),
                Line::from(""),
                key("Ctrl+S", "Save from any field"),
                key("Esc / Ctrl+C", "Discard changes and quit"),
                key("F1", "Show this help"),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Alarm Threshold: ", Style::default().fg(Color::Magenta)),
                    Span::raw(THRESHOLD_TOOLTIP),
                ]),
                Line::from(Span::styled(
                    format!(
                        "Settings: {} ({}) / {} v{}",
                        app.config.organization_name,
                        app.config.organization_domain,
                        app.config.application_name,
                        app.config.application_version
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::raw("          "),
                    Span::styled("[Enter/Esc]", Style::default().fg(Color::Green)),
                    Span::raw(" Close"),
                ]),
            ];
            ((60, 70), " ⌨️  Keyboard Shortcuts ", help_content, Style::default().fg(Color::Cyan))
        }
        Dialog::RestartNotice(notice) => {
            let mut notice_content = vec![Line::from("")];
            notice_content.extend(notice.lines().map(|l| {
                Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Yellow)))
            }));
            notice_content.extend([
                Line::from(""),
                Line::from(vec![
                    Span::styled("[Enter]", Style::default().fg(Color::Green)),
                    Span::raw(" OK"),
                ]),
            ]);
            ((60, 40), " ⚠️  Configuration Changed ", notice_content, Style::default().fg(Color::Yellow))
        }
        Dialog::None => return,
    };

    let area = centered_rect(area_size.0, area_size.1, frame.area());

    // Clear background
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style);
    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let dialog = Paragraph::new(content).wrap(Wrap { trim: false });
    frame.render_widget(dialog, pad_rect(inner_area, 2, 1, 0, 0));
}
