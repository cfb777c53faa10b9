//! UPS Alarm configurator - TUI settings dialog for the upsAlarm notifier
//!
//! Edits the mail credentials, recipients, alarm threshold and message the
//! notifier service reads, and stores them under the IPCF-CNR/UPS-Alarm namespace.

mod app;
mod config;
mod dialog;
mod event;
mod settings;
mod store;
mod tui;
mod ui;

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use app::App;
use config::AppConfig;
use dialog::{ConfigureDialog, DialogOutcome};
use store::{JsonFileStore, StoreError};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = AppConfig::default();

    // Log to a file; the terminal belongs to the form
    init_logging(&config)?;

    let settings_path = config.settings_path()?;
    let store = match JsonFileStore::open(&settings_path) {
        Ok(store) => store,
        Err(e @ StoreError::Parse { .. }) => {
            warn!(error = %e, "Settings file unreadable, starting from defaults");
            JsonFileStore::empty(&settings_path)
        }
        Err(e) => return Err(e).context("Failed to open settings store"),
    };
    let location = store.path().display().to_string();

    let mut app = App::new(config, Box::new(store), location);
    let mut terminal = tui::init()?;

    let result = app.run(&mut terminal);

    // Restore terminal state before handling any errors
    tui::restore()?;

    if result? == DialogOutcome::Confirmed {
        print_configuration(&app.dialog);
    }

    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path()?;
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir).context("Failed to create log directory")?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(file_layer)
        .init();

    Ok(())
}

/// Summary of the active configuration after a confirmed close
fn print_configuration(dialog: &ConfigureDialog) {
    println!("Configuration saved.");
    println!("  Username:        {}", dialog.username());
    println!(
        "  Password:        {}",
        if dialog.password().is_empty() { "(empty)" } else { "(set)" }
    );
    println!("  Mail Server:     {}", dialog.mail_server());
    println!("  To:              {}", dialog.to_destination());
    println!("  Cc:              {}", dialog.cc_destination());
    println!("  Cc1:             {}", dialog.cc1_destination());
    println!("  Alarm Threshold: {}", dialog.max_temperature());
    println!("  Message:         {} line(s)", dialog.message().lines().count());
}
