//! UI rendering with Ratatui

pub mod components;
pub mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Dialog};
use self::components::{
    dialogs::render_dialog,
    form::render_form,
    statusbar::render_status_bar,
    toast::render_toasts,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Form
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if app.popup != Dialog::None {
        render_dialog(frame, app);
    }

    // Render toasts on top
    render_toasts(frame, app);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.config.application_name),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("notifications for the {} service", app.config.service_name),
            Style::default().fg(Color::White),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" UPS Alarm Configuration ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::config::AppConfig;
    use crate::event::AppEvent;
    use crate::settings::SettingsField;
    use crate::store::{MemoryStore, SettingsStore};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn open_app(store: MemoryStore) -> App {
        let mut app = App::new(AppConfig::default(), Box::new(store), "memory".to_string());
        app.open();
        app
    }

    #[test]
    fn test_form_shows_every_label() {
        let app = open_app(MemoryStore::new());
        let text = screen_text(&app);

        for field in SettingsField::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("upsgenerale"));
        assert!(text.contains("posta.ipcf.cnr.it"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut store = MemoryStore::new();
        store.set_string("Password:", "hunter2").unwrap();
        let app = open_app(store);

        let text = screen_text(&app);

        assert!(!text.contains("hunter2"));
        assert!(text.contains("*******"));
    }

    #[test]
    fn test_invalid_threshold_is_reported() {
        let mut app = open_app(MemoryStore::new());
        app.selected_field = SettingsField::AlarmThreshold;
        while !app.dialog.field_text(SettingsField::AlarmThreshold).is_empty() {
            app.handle_event(AppEvent::Backspace);
        }
        app.handle_event(AppEvent::Input('3'));
        assert!(!screen_text(&app).contains("Alarm threshold invalid"));

        app.handle_event(AppEvent::Input('5'));
        assert_eq!(app.dialog.field_text(SettingsField::AlarmThreshold), "35");

        let text = screen_text(&app);

        assert!(text.contains("Alarm threshold invalid"));
    }

    #[test]
    fn test_huge_message_renders_with_cursor() {
        let mut app = open_app(MemoryStore::new());
        app.selected_field = SettingsField::Message;
        // 65536 lines, one more than a u16 can count
        app.dialog
            .set_field_text(SettingsField::Message, "\n".repeat(usize::from(u16::MAX)));

        let text = screen_text(&app);

        assert!(text.contains("Message to Send:"));
    }

    #[test]
    fn test_restart_notice_is_rendered() {
        let mut app = open_app(MemoryStore::new());
        app.handle_event(AppEvent::Confirm);

        let text = screen_text(&app);

        assert!(text.contains("sudo systemctl restart upsAlarm.service"));
    }
}
