//! Event handling for keyboard input

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Type a character into the selected input
    Input(char),
    /// Delete the last character of the selected input
    Backspace,
    /// Move to the next input
    NextField,
    /// Move to the previous input
    PrevField,
    /// Enter key: confirm, or a line break in the message body
    Enter,
    /// Confirm from any input
    Confirm,
    /// Cancel the dialog / dismiss a popup
    Cancel,
    /// Show help popup
    ShowHelp,
    /// Resize event (width, height)
    Resize(u16, u16),
    /// No action
    None,
}

/// Poll for keyboard events with timeout
pub fn poll_event(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(map_key_event(key)));
                }
            }
            Event::Resize(w, h) => {
                return Ok(Some(AppEvent::Resize(w, h)));
            }
            _ => {}
        }
    }
    Ok(None)
}

/// Map key events to application events
pub fn map_key_event(key: KeyEvent) -> AppEvent {
    match (key.modifiers, key.code) {
        // Cancel
        (_, KeyCode::Esc) => AppEvent::Cancel,
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => AppEvent::Cancel,

        // Confirm
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => AppEvent::Confirm,
        (_, KeyCode::Enter) => AppEvent::Enter,

        // Field navigation
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => AppEvent::PrevField,
        (_, KeyCode::Tab) | (_, KeyCode::Down) => AppEvent::NextField,

        // Help
        (_, KeyCode::F(1)) => AppEvent::ShowHelp,

        // Editing
        (_, KeyCode::Backspace) => AppEvent::Backspace,
        (modifiers, KeyCode::Char(c))
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppEvent::Input(c)
        }

        _ => AppEvent::None,
    }
}
