use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::dialog::{ConfigureDialog, DialogOutcome};
use crate::settings::SettingsField;

/// Popup shown over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    None,
    Help,                  // Key bindings
    RestartNotice(String), // Shown after a confirmed save
}

/// Toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
}

/// Application state
pub struct App {
    // Core
    pub config: AppConfig,
    pub should_quit: bool,
    pub outcome: Option<DialogOutcome>,

    // Form
    pub dialog: ConfigureDialog,
    pub selected_field: SettingsField,

    // Status
    pub status_message: String,
    pub settings_location: String,

    // Popups
    pub popup: Dialog,

    // Toast notifications
    pub toasts: Vec<Toast>,

    // Window state
    pub window_size: (u16, u16),
}
