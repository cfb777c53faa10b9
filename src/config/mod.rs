//! Application configuration

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::store::JsonFileStore;

/// Application-wide configuration
pub struct AppConfig {
    /// Organization namespace of the settings store
    pub organization_name: String,
    pub organization_domain: String,
    /// Application namespace of the settings store
    pub application_name: String,
    pub application_version: String,
    /// Background service that reads the saved settings
    pub service_name: String,
    /// Tick rate for UI refresh in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            organization_name: "IPCF-CNR".to_string(),
            organization_domain: "ipcf.cnr.it".to_string(),
            application_name: "UPS-Alarm".to_string(),
            application_version: env!("CARGO_PKG_VERSION").to_string(),
            service_name: "upsAlarm".to_string(),
            tick_rate_ms: 250,
        }
    }
}

impl AppConfig {
    /// Settings file for this organization/application
    pub fn settings_path(&self) -> Result<PathBuf> {
        JsonFileStore::default_path(&self.organization_name, &self.application_name)
            .context("Failed to locate settings file")
    }

    /// Log file next to the settings file
    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.settings_path()?.with_extension("log"))
    }

    /// Advisory shown after the settings were saved
    pub fn restart_notice(&self) -> String {
        format!(
            "Warning:\nThe service {0} MUST be Restarted with:\nsudo systemctl restart {0}.service\nfor the new settings to take effect !",
            self.service_name
        )
    }
}
