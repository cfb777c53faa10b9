//! Configuration dialog state, independent of any rendering layer

use tracing::{debug, info};

use crate::settings::{Settings, SettingsField, is_valid_threshold, parse_threshold};
use crate::store::{SettingsStore, StoreError};

/// Whether the dialog is currently shown
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// How a modal session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

/// Visual style of an input
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    #[default]
    Normal,
    Error,
}

/// Modal form over the configuration record.
///
/// Edits live in memory until [`ConfigureDialog::on_confirm`] writes them to
/// the store; [`ConfigureDialog::on_cancel`] throws them away.
pub struct ConfigureDialog {
    store: Box<dyn SettingsStore>,
    restart_notice: String,
    record: Settings,
    state: DialogState,
    can_close: bool,
    threshold_style: FieldStyle,
    pending_notice: Option<String>,
}

impl ConfigureDialog {
    pub fn new(store: Box<dyn SettingsStore>, restart_notice: impl Into<String>) -> Self {
        let mut dialog = Self {
            store,
            restart_notice: restart_notice.into(),
            record: Settings::default(),
            state: DialogState::Closed,
            can_close: true,
            threshold_style: FieldStyle::Normal,
            pending_notice: None,
        };
        dialog.reload();
        dialog
    }

    /// Reload from the store, discarding edits, and show the form
    pub fn open(&mut self) {
        self.reload();
        self.state = DialogState::Open;
        info!("Configuration dialog opened");
    }

    /// Live validation of the alarm threshold input
    pub fn on_field_changed(&mut self, threshold_text: &str) {
        if self.record.alarm_threshold != threshold_text {
            self.record.alarm_threshold = threshold_text.to_string();
        }

        let value = parse_threshold(threshold_text);
        self.can_close = is_valid_threshold(value);
        self.threshold_style = if self.can_close {
            FieldStyle::Normal
        } else {
            FieldStyle::Error
        };
        debug!(text = threshold_text, value, can_close = self.can_close, "Threshold edited");
    }

    /// Replace the text of any input, validating the threshold
    pub fn set_field_text(&mut self, field: SettingsField, text: String) {
        if field == SettingsField::AlarmThreshold {
            self.on_field_changed(&text);
        } else {
            *self.record.field_mut(field) = text;
        }
    }

    /// Persist and close. Returns `Ok(None)` while the threshold is invalid
    /// or the dialog is not open; the form then stays as it is.
    pub fn on_confirm(&mut self) -> Result<Option<DialogOutcome>, StoreError> {
        if self.state != DialogState::Open {
            return Ok(None);
        }
        if !self.can_close {
            debug!(text = %self.record.alarm_threshold, "Confirm rejected: invalid threshold");
            return Ok(None);
        }

        self.record.save(&mut *self.store)?;
        self.pending_notice = Some(self.restart_notice.clone());
        self.state = DialogState::Closed;
        info!("Configuration saved");

        Ok(Some(DialogOutcome::Confirmed))
    }

    /// Discard edits and close
    pub fn on_cancel(&mut self) -> DialogOutcome {
        self.reload();
        self.state = DialogState::Closed;
        info!("Configuration dialog cancelled");
        DialogOutcome::Cancelled
    }

    /// Advisory notice raised by the last confirm, if not yet shown
    pub fn take_notice(&mut self) -> Option<String> {
        self.pending_notice.take()
    }

    /// Record the current window geometry; stored on the next confirm
    pub fn set_geometry(&mut self, geometry: Vec<u8>) {
        self.record.geometry = geometry;
    }

    fn reload(&mut self) {
        self.record = Settings::load(&*self.store);
        let threshold = self.record.alarm_threshold.clone();
        self.on_field_changed(&threshold);
    }

    #[cfg(test)]
    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn can_close(&self) -> bool {
        self.can_close
    }

    pub fn threshold_style(&self) -> FieldStyle {
        self.threshold_style
    }

    #[cfg(test)]
    pub fn record(&self) -> &Settings {
        &self.record
    }

    pub fn field_text(&self, field: SettingsField) -> &str {
        self.record.field(field)
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn SettingsStore {
        &*self.store
    }

    pub fn geometry(&self) -> &[u8] {
        &self.record.geometry
    }

    pub fn username(&self) -> &str {
        &self.record.username
    }

    pub fn password(&self) -> &str {
        &self.record.password
    }

    pub fn mail_server(&self) -> &str {
        &self.record.mail_server
    }

    pub fn to_destination(&self) -> &str {
        &self.record.to
    }

    pub fn cc_destination(&self) -> &str {
        &self.record.cc
    }

    pub fn cc1_destination(&self) -> &str {
        &self.record.cc1
    }

    pub fn message(&self) -> &str {
        &self.record.message
    }

    pub fn max_temperature(&self) -> f64 {
        self.record.max_temperature()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GEOMETRY_KEY;
    use crate::store::{JsonFileStore, MemoryStore};
    use tempfile::TempDir;

    const NOTICE: &str = "restart upsAlarm";

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set_string("Username:", "operator").unwrap();
        store.set_string("Mail Server:", "smtp.example.org").unwrap();
        store.set_string("To:", "lab@example.org").unwrap();
        store.set_string("Alarm Threshold", "26").unwrap();
        store.set_string("Message to Send:", "Too hot").unwrap();
        store
    }

    fn open_dialog(store: MemoryStore) -> ConfigureDialog {
        let mut dialog = ConfigureDialog::new(Box::new(store), NOTICE);
        dialog.open();
        dialog
    }

    #[test]
    fn test_open_loads_store() {
        let dialog = open_dialog(seeded_store());

        assert_eq!(dialog.state(), DialogState::Open);
        assert_eq!(dialog.username(), "operator");
        assert_eq!(dialog.mail_server(), "smtp.example.org");
        assert_eq!(dialog.to_destination(), "lab@example.org");
        assert_eq!(dialog.cc_destination(), "");
        assert_eq!(dialog.message(), "Too hot");
        assert_eq!(dialog.max_temperature(), 26.0);
        assert!(dialog.can_close());
    }

    #[test]
    fn test_valid_threshold_allows_close() {
        let mut dialog = open_dialog(MemoryStore::new());

        dialog.on_field_changed("28.0");

        assert!(dialog.can_close());
        assert_eq!(dialog.threshold_style(), FieldStyle::Normal);
    }

    #[test]
    fn test_out_of_range_threshold_blocks_confirm() {
        let mut dialog = open_dialog(seeded_store());

        dialog.on_field_changed("35");

        assert!(!dialog.can_close());
        assert_eq!(dialog.threshold_style(), FieldStyle::Error);
        assert_eq!(dialog.on_confirm().unwrap(), None);
        assert_eq!(dialog.state(), DialogState::Open);
        assert_eq!(dialog.store().string("Alarm Threshold", ""), "26");
        assert!(dialog.take_notice().is_none());
    }

    #[test]
    fn test_negative_threshold_blocks_close() {
        let mut dialog = open_dialog(MemoryStore::new());

        dialog.on_field_changed("-1");

        assert!(!dialog.can_close());
    }

    #[test]
    fn test_non_numeric_threshold_counts_as_zero() {
        let mut dialog = open_dialog(MemoryStore::new());

        dialog.on_field_changed("abc");

        assert!(!dialog.can_close());
        assert_eq!(dialog.max_temperature(), 0.0);
        assert_eq!(dialog.threshold_style(), FieldStyle::Error);
    }

    #[test]
    fn test_correcting_threshold_restores_normal_style() {
        let mut dialog = open_dialog(MemoryStore::new());

        dialog.on_field_changed("3");
        dialog.on_field_changed("35");
        dialog.on_field_changed("3");

        assert!(dialog.can_close());
        assert_eq!(dialog.threshold_style(), FieldStyle::Normal);
    }

    #[test]
    fn test_confirm_persists_and_raises_notice() {
        let mut dialog = open_dialog(seeded_store());

        dialog.set_field_text(SettingsField::Cc, "boss@example.org".to_string());
        dialog.set_field_text(SettingsField::AlarmThreshold, "22.5".to_string());
        dialog.set_geometry(vec![0, 100, 0, 30]);

        assert_eq!(dialog.on_confirm().unwrap(), Some(DialogOutcome::Confirmed));
        assert_eq!(dialog.state(), DialogState::Closed);
        assert_eq!(dialog.take_notice().as_deref(), Some(NOTICE));
        assert!(dialog.take_notice().is_none());

        let store = dialog.store();
        assert_eq!(store.string("Cc:", ""), "boss@example.org");
        assert_eq!(store.string("Alarm Threshold", ""), "22.5");
        assert_eq!(store.string("Username:", ""), "operator");
        assert_eq!(store.bytes(GEOMETRY_KEY), vec![0, 100, 0, 30]);

        // Accessors keep serving the committed values
        assert_eq!(dialog.cc_destination(), "boss@example.org");
        assert_eq!(dialog.max_temperature(), 22.5);
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let mut dialog = open_dialog(seeded_store());
        let before = Settings::load(dialog.store());

        dialog.set_field_text(SettingsField::Username, "intruder".to_string());
        dialog.set_field_text(SettingsField::Message, "changed".to_string());
        dialog.on_field_changed("99");

        assert_eq!(dialog.on_cancel(), DialogOutcome::Cancelled);
        assert_eq!(dialog.state(), DialogState::Closed);
        assert_eq!(Settings::load(dialog.store()), before);
        assert_eq!(dialog.record(), &before);
        assert!(dialog.can_close());
        assert_eq!(dialog.threshold_style(), FieldStyle::Normal);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut dialog = open_dialog(seeded_store());
        dialog.set_field_text(SettingsField::Password, "x".to_string());

        dialog.on_cancel();
        let once = dialog.record().clone();
        dialog.on_cancel();

        assert_eq!(dialog.record(), &once);
    }

    #[test]
    fn test_open_discards_previous_edits() {
        let mut dialog = open_dialog(seeded_store());
        dialog.set_field_text(SettingsField::To, "nobody".to_string());

        dialog.open();

        assert_eq!(dialog.to_destination(), "lab@example.org");
    }

    #[test]
    fn test_confirm_while_closed_is_ignored() {
        let mut dialog = ConfigureDialog::new(Box::new(MemoryStore::new()), NOTICE);

        assert_eq!(dialog.on_confirm().unwrap(), None);
        assert!(dialog.store().value("Username:").is_none());
    }

    #[test]
    fn test_invalid_stored_threshold_is_flagged_on_open() {
        let mut store = MemoryStore::new();
        store.set_string("Alarm Threshold", "40").unwrap();

        let mut dialog = open_dialog(store);

        assert!(!dialog.can_close());
        assert_eq!(dialog.on_confirm().unwrap(), None);
    }

    #[test]
    fn test_cancel_after_failed_save_restores_persisted_values() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = JsonFileStore::empty(blocker.join("UPS-Alarm.json"));

        let mut dialog = ConfigureDialog::new(Box::new(store), NOTICE);
        dialog.open();
        dialog.set_field_text(SettingsField::Username, "unsaved".to_string());

        assert!(dialog.on_confirm().is_err());
        assert_eq!(dialog.state(), DialogState::Open);
        assert!(dialog.take_notice().is_none());

        assert_eq!(dialog.on_cancel(), DialogOutcome::Cancelled);
        assert_eq!(dialog.username(), "upsgenerale");
        assert!(dialog.store().value("Username:").is_none());
    }
}
