//! Core Types für die Ampel-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use alloc::string::{String, ToString};

use crate::traits::UnknownStatusError;

/// Standard-Pin für die rote LED
pub const DEFAULT_RED_PIN: u8 = 11;

/// Standard-Pin für die gelbe LED
pub const DEFAULT_YELLOW_PIN: u8 = 10;

/// Standard-Pin für die grüne LED
pub const DEFAULT_GREEN_PIN: u8 = 9;

/// Standard-Belegung der drei Ampel-LEDs
pub const DEFAULT_PINS: PinMap = PinMap {
    red: DEFAULT_RED_PIN,
    yellow: DEFAULT_YELLOW_PIN,
    green: DEFAULT_GREEN_PIN,
};

/// Status einer Benachrichtigung (z.B. Ergebnis eines Build- oder Testlaufs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatusType {
    /// Grüne LED
    Success,
    /// Gelbe LED
    Pending,
    /// Rote LED
    Failed,
    /// Generische Nachricht: alle LEDs bleiben aus
    Notify,
}

impl StatusType {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusType::Success => "success",
            StatusType::Pending => "pending",
            StatusType::Failed => "failed",
            StatusType::Notify => "notify",
        }
    }
}

impl core::fmt::Display for StatusType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::convert::TryFrom<&str> for StatusType {
    type Error = UnknownStatusError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "success" => Ok(StatusType::Success),
            "pending" => Ok(StatusType::Pending),
            "failed" => Ok(StatusType::Failed),
            "notify" => Ok(StatusType::Notify),
            other => Err(UnknownStatusError {
                name: other.to_string(),
            }),
        }
    }
}

/// Pin-Belegung der drei Ampel-LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinMap {
    pub red: u8,
    pub yellow: u8,
    pub green: u8,
}

impl PinMap {
    /// Alle drei Pins in der Reihenfolge Rot, Gelb, Grün
    pub fn all(self) -> [u8; 3] {
        [self.red, self.yellow, self.green]
    }
}

impl Default for PinMap {
    fn default() -> Self {
        DEFAULT_PINS
    }
}

/// Konfiguration eines Notifiers
///
/// Wird einmal beim Erstellen zusammengesetzt (Defaults + Overrides)
/// und danach nicht mehr verändert.
///
/// ```
/// # use ampel_core::NotifierOptions;
/// let options = NotifierOptions::default()
///     .with_device("/dev/ttyUSB0")
///     .with_red(13);
/// assert_eq!(options.device(), Some("/dev/ttyUSB0"));
/// assert_eq!(options.pins().red, 13);
/// assert_eq!(options.pins().green, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NotifierOptions {
    device: Option<String>,
    red: u8,
    yellow: u8,
    green: u8,
}

impl Default for NotifierOptions {
    fn default() -> Self {
        Self {
            device: None,
            red: DEFAULT_PINS.red,
            yellow: DEFAULT_PINS.yellow,
            green: DEFAULT_PINS.green,
        }
    }
}

impl NotifierOptions {
    /// Serieller Port (z.B. "/dev/ttyUSB0"). `None` überlässt die Auswahl dem Client.
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn with_red(mut self, pin: u8) -> Self {
        self.red = pin;
        self
    }

    pub fn with_yellow(mut self, pin: u8) -> Self {
        self.yellow = pin;
        self
    }

    pub fn with_green(mut self, pin: u8) -> Self {
        self.green = pin;
        self
    }

    /// Setzt alle drei Pins auf einmal
    pub fn with_pins(self, pins: PinMap) -> Self {
        self.with_red(pins.red)
            .with_yellow(pins.yellow)
            .with_green(pins.green)
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn pins(&self) -> PinMap {
        PinMap {
            red: self.red,
            yellow: self.yellow,
            green: self.green,
        }
    }
}

/// Optionen für einen einzelnen `notify()` Aufruf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotifyOptions {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub status: StatusType,
}

impl NotifyOptions {
    pub fn new(status: StatusType) -> Self {
        Self { status }
    }
}

impl From<StatusType> for NotifyOptions {
    fn from(status: StatusType) -> Self {
        Self::new(status)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for StatusType {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinMap {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PinMap {{ red: {}, yellow: {}, green: {} }}",
            self.red,
            self.yellow,
            self.green
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = NotifierOptions::default();
        assert_eq!(options.device(), None);
        assert_eq!(options.pins(), DEFAULT_PINS);
    }

    #[test]
    fn test_with_pins_overrides_all() {
        let pins = PinMap {
            red: 13,
            yellow: 7,
            green: 1,
        };
        let options = NotifierOptions::default().with_pins(pins);
        assert_eq!(options.pins(), pins);
    }

    #[test]
    fn test_status_type_names() {
        let all = [
            StatusType::Success,
            StatusType::Pending,
            StatusType::Failed,
            StatusType::Notify,
        ];
        for status in all {
            assert_eq!(StatusType::try_from(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_status_type_unknown_name() {
        let err = StatusType::try_from("blinking").unwrap_err();
        assert_eq!(err.name, "blinking");
    }
}
