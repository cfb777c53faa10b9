//! Application state and event loop around the configuration dialog

pub mod actions;
pub mod handlers;
pub mod state;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::dialog::{ConfigureDialog, DialogOutcome};
use crate::event::poll_event;
use crate::settings::{decode_geometry, SettingsField};
use crate::store::SettingsStore;
use crate::tui::Tui;
use crate::ui;

pub use state::{App, Dialog, ToastType};

/// Fallback terminal size until the first resize event
const DEFAULT_WINDOW_SIZE: (u16, u16) = (80, 24);

impl App {
    /// Create the application around an injected settings store
    pub fn new(config: AppConfig, store: Box<dyn SettingsStore>, settings_location: String) -> Self {
        let dialog = ConfigureDialog::new(store, config.restart_notice());

        // Last known size stands in until the terminal reports one
        let window_size = decode_geometry(dialog.geometry()).unwrap_or(DEFAULT_WINDOW_SIZE);

        Self {
            config,
            should_quit: false,
            outcome: None,
            dialog,
            selected_field: SettingsField::Username,
            status_message: "Ready".to_string(),
            settings_location,
            popup: Dialog::None,
            toasts: Vec::new(),
            window_size,
        }
    }

    /// Show the dialog and run it modally until it is confirmed or cancelled
    pub fn run(&mut self, terminal: &mut Tui) -> Result<DialogOutcome> {
        self.open();

        if let Ok(size) = terminal.size() {
            self.resize(size.width, size.height);
        }

        let tick_rate = Duration::from_millis(self.config.tick_rate_ms);

        loop {
            terminal
                .draw(|f| ui::render(f, self))
                .context("Failed to draw configuration form")?;

            if let Some(event) = poll_event(tick_rate)? {
                self.handle_event(event);
            }

            self.cleanup_old_toasts();

            if self.should_quit {
                break;
            }
        }

        let outcome = self.outcome.unwrap_or(DialogOutcome::Cancelled);
        info!(?outcome, "Configuration dialog closed");
        Ok(outcome)
    }

    /// Reset per-session state and (re)load the form
    pub fn open(&mut self) {
        self.dialog.open();
        self.selected_field = SettingsField::Username;
        self.popup = Dialog::None;
        self.outcome = None;
        self.should_quit = false;
        self.status_message = "Ready".to_string();
    }
}
