use chrono::Utc;
use tracing::{debug, error};

use crate::app::state::{App, Dialog, Toast, ToastType};
use crate::settings::encode_geometry;

/// Seconds a toast stays on screen
const TOAST_LIFETIME_SECS: i64 = 5;

impl App {
    // --- Toast Methods ---

    /// Add a toast notification
    pub fn add_toast(&mut self, message: String, toast_type: ToastType) {
        self.toasts.push(Toast {
            message,
            toast_type,
            created_at: Utc::now(),
        });
    }

    /// Remove expired toasts
    pub fn cleanup_old_toasts(&mut self) {
        let now = Utc::now();
        self.toasts.retain(|toast| {
            now.signed_duration_since(toast.created_at).num_seconds() < TOAST_LIFETIME_SECS
        });
    }

    // --- Form Editing ---

    /// Append a character to the selected input
    pub fn insert_char(&mut self, c: char) {
        let field = self.selected_field;
        let mut text = self.dialog.field_text(field).to_string();
        text.push(c);
        self.dialog.set_field_text(field, text);
    }

    /// Remove the last character of the selected input
    pub fn delete_char(&mut self) {
        let field = self.selected_field;
        let mut text = self.dialog.field_text(field).to_string();
        if text.pop().is_some() {
            self.dialog.set_field_text(field, text);
        }
    }

    pub fn navigate_field(&mut self, up: bool) {
        self.selected_field = if up {
            self.selected_field.prev()
        } else {
            self.selected_field.next()
        };
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.window_size = (width, height);
        self.dialog.set_geometry(encode_geometry(width, height));
    }

    // --- Dialog Outcome ---

    /// Try to save; stays on the form while the threshold is invalid
    pub fn confirm(&mut self) {
        match self.dialog.on_confirm() {
            Ok(Some(outcome)) => {
                self.outcome = Some(outcome);
                self.status_message = "Settings saved".to_string();
                self.add_toast("Settings saved".to_string(), ToastType::Success);

                match self.dialog.take_notice() {
                    Some(notice) => self.popup = Dialog::RestartNotice(notice),
                    None => self.should_quit = true,
                }
            }
            Ok(None) => {
                debug!("Confirm ignored, form is not closable");
            }
            Err(e) => {
                error!(error = %e, "Failed to save settings");
                self.status_message = "Save failed".to_string();
                self.add_toast(format!("Failed to save settings: {}", e), ToastType::Error);
            }
        }
    }

    /// Discard edits and leave
    pub fn cancel(&mut self) {
        self.outcome = Some(self.dialog.on_cancel());
        self.should_quit = true;
    }
}
