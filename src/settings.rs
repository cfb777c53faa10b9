//! Configuration record for the UPS alarm notifier

use crate::store::{SettingsStore, StoreError};

/// Store key of the window geometry blob
pub const GEOMETRY_KEY: &str = "Configuration Dialog";

pub const DEFAULT_USERNAME: &str = "upsgenerale";
pub const DEFAULT_MAIL_SERVER: &str = "posta.ipcf.cnr.it";
pub const DEFAULT_ALARM_THRESHOLD: &str = "28.0";

/// Exclusive bounds of a valid alarm threshold
pub const THRESHOLD_MIN: f64 = 0.0;
pub const THRESHOLD_MAX: f64 = 30.0;

pub const THRESHOLD_TOOLTIP: &str = "Enter a value >0.0 and <30.0";

/// Parse threshold text; anything unparsable counts as zero
pub fn parse_threshold(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

pub fn is_valid_threshold(value: f64) -> bool {
    value > THRESHOLD_MIN && value < THRESHOLD_MAX
}

/// Everything the notifier needs, as edited in the dialog.
///
/// The alarm threshold is kept as the text the user typed so that it
/// round-trips through the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub username: String,
    pub password: String,
    pub mail_server: String,
    pub to: String,
    pub cc: String,
    pub cc1: String,
    pub alarm_threshold: String,
    pub message: String,
    /// Opaque, passed through to the store untouched
    pub geometry: Vec<u8>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            password: String::new(),
            mail_server: DEFAULT_MAIL_SERVER.to_string(),
            to: String::new(),
            cc: String::new(),
            cc1: String::new(),
            alarm_threshold: DEFAULT_ALARM_THRESHOLD.to_string(),
            message: String::new(),
            geometry: Vec::new(),
        }
    }
}

impl Settings {
    /// Read every field from the store, falling back to defaults
    pub fn load(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        let mut settings = Self {
            geometry: store.bytes(GEOMETRY_KEY),
            ..Self::default()
        };

        for field in SettingsField::ALL {
            let value = store.string(field.label(), defaults.field(field));
            *settings.field_mut(field) = value;
        }

        settings
    }

    /// Write every field to the store and flush it
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), StoreError> {
        store.set_bytes(GEOMETRY_KEY, &self.geometry)?;

        for field in SettingsField::ALL {
            store.set_string(field.label(), self.field(field))?;
        }

        store.sync()
    }

    pub fn field(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::Username => &self.username,
            SettingsField::Password => &self.password,
            SettingsField::MailServer => &self.mail_server,
            SettingsField::To => &self.to,
            SettingsField::Cc => &self.cc,
            SettingsField::Cc1 => &self.cc1,
            SettingsField::AlarmThreshold => &self.alarm_threshold,
            SettingsField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::Username => &mut self.username,
            SettingsField::Password => &mut self.password,
            SettingsField::MailServer => &mut self.mail_server,
            SettingsField::To => &mut self.to,
            SettingsField::Cc => &mut self.cc,
            SettingsField::Cc1 => &mut self.cc1,
            SettingsField::AlarmThreshold => &mut self.alarm_threshold,
            SettingsField::Message => &mut self.message,
        }
    }

    /// Threshold as a number (0 when the text does not parse)
    pub fn max_temperature(&self) -> f64 {
        parse_threshold(&self.alarm_threshold)
    }
}

/// Which input of the configuration form is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Username,
    Password,
    MailServer,
    To,
    Cc,
    Cc1,
    AlarmThreshold,
    Message,
}

impl SettingsField {
    /// All fields in tab order
    pub const ALL: [SettingsField; 8] = [
        Self::Username,
        Self::Password,
        Self::MailServer,
        Self::To,
        Self::Cc,
        Self::Cc1,
        Self::AlarmThreshold,
        Self::Message,
    ];

    /// Display label, also used as the store key
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username:",
            Self::Password => "Password:",
            Self::MailServer => "Mail Server:",
            Self::To => "To:",
            Self::Cc => "Cc:",
            Self::Cc1 => "Cc1:",
            Self::AlarmThreshold => "Alarm Threshold",
            Self::Message => "Message to Send:",
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            Self::AlarmThreshold => Some(THRESHOLD_TOOLTIP),
            _ => None,
        }
    }

    /// Get the next field
    pub fn next(&self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::MailServer,
            Self::MailServer => Self::To,
            Self::To => Self::Cc,
            Self::Cc => Self::Cc1,
            Self::Cc1 => Self::AlarmThreshold,
            Self::AlarmThreshold => Self::Message,
            Self::Message => Self::Username,
        }
    }

    /// Get the previous field
    pub fn prev(&self) -> Self {
        match self {
            Self::Username => Self::Message,
            Self::Password => Self::Username,
            Self::MailServer => Self::Password,
            Self::To => Self::MailServer,
            Self::Cc => Self::To,
            Self::Cc1 => Self::Cc,
            Self::AlarmThreshold => Self::Cc1,
            Self::Message => Self::AlarmThreshold,
        }
    }
}

/// Encode the terminal size the form was last shown at
pub fn encode_geometry(width: u16, height: u16) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(4);
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes
}

/// Decode a geometry blob; foreign or empty blobs yield `None`
pub fn decode_geometry(bytes: &[u8]) -> Option<(u16, u16)> {
    match bytes {
        [w0, w1, h0, h1] => Some((
            u16::from_be_bytes([*w0, *w1]),
            u16::from_be_bytes([*h0, *h1]),
        )),
        _ => None,
    }
}
