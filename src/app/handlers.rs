use crate::app::state::{App, Dialog};
use crate::event::AppEvent;

impl App {
    /// Handle application events
    pub fn handle_event(&mut self, event: AppEvent) {
        // Handle popup events first
        if self.popup != Dialog::None {
            return self.handle_popup_event(event);
        }

        match event {
            AppEvent::Input(c) => self.insert_char(c),
            AppEvent::Backspace => self.delete_char(),

            AppEvent::NextField => self.navigate_field(false),
            AppEvent::PrevField => self.navigate_field(true),

            AppEvent::Enter => {
                if self.selected_field.is_multiline() {
                    self.insert_char('\n');
                } else {
                    self.confirm();
                }
            }
            AppEvent::Confirm => self.confirm(),
            AppEvent::Cancel => self.cancel(),

            AppEvent::ShowHelp => self.popup = Dialog::Help,

            AppEvent::Resize(w, h) => self.resize(w, h),

            AppEvent::None => {}
        }
    }

    /// Handle events when a popup is open
    fn handle_popup_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Enter | AppEvent::Confirm | AppEvent::Cancel => {
                // The notice is the last step of a confirmed session
                if matches!(self.popup, Dialog::RestartNotice(_)) {
                    self.should_quit = true;
                }
                self.popup = Dialog::None;
            }
            AppEvent::Resize(w, h) => self.resize(w, h),
            _ => {}
        }
    }
}
