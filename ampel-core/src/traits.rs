//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für den Zugriff auf den
//! Mikrocontroller ohne konkrete Implementierung.

use alloc::string::String;

use crate::types::NotifyOptions;

/// Fehler beim Erstellen eines Notifiers
///
/// Enthält die Meldung des darunterliegenden Client-Fehlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("notifier unavailable: {message}")]
pub struct UnavailableError {
    pub message: String,
}

impl UnavailableError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unbekannter Status-Name (z.B. aus einer Konfiguration)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status type: {name:?}")]
pub struct UnknownStatusError {
    pub name: String,
}

/// Trait für digitale Pin-Ausgänge
///
/// # Implementierungen
/// - **Production:** `FirmataBoard` (firmata Crate, ampel-serial)
/// - **Testing:** `MockConnection` (in-memory Mock)
pub trait DigitalWrite {
    type Error: core::fmt::Debug;

    /// Setzt einen Pin auf aktiv (`true`) oder inaktiv (`false`)
    fn digital_write(&mut self, pin: u8, value: bool) -> Result<(), Self::Error>;
}

/// Trait für den Verbindungsaufbau zum Mikrocontroller
pub trait Connector {
    type Connection: DigitalWrite;
    type Error: core::fmt::Display;

    /// Öffnet eine Verbindung
    ///
    /// `device = None` überlässt die Geräteauswahl der Implementierung.
    fn connect(&self, device: Option<&str>) -> Result<Self::Connection, Self::Error>;
}

/// Schnittstelle eines Benachrichtigungs-Backends
pub trait Notifier {
    type Error;

    /// Kurzname des Backends
    fn name(&self) -> &'static str;

    /// Zeigt eine Benachrichtigung an
    fn notify(&mut self, message: &str, options: &NotifyOptions) -> Result<(), Self::Error>;

    fn turn_on(&mut self) -> Result<(), Self::Error>;

    fn turn_off(&mut self) -> Result<(), Self::Error>;
}
