//! LED Notifier
//!
//! Übersetzt Status-Benachrichtigungen in Pin-Zustände auf dem
//! Mikrocontroller. Die Verbindung gehört exklusiv dem Notifier und
//! wird mit ihm freigegeben.

use alloc::string::ToString;

use log::{debug, info, warn};

use crate::logic::pin_for_status;
use crate::traits::{Connector, DigitalWrite, Notifier, UnavailableError};
use crate::types::{NotifierOptions, NotifyOptions, PinMap};

/// Name des Backends
pub const NOTIFIER_NAME: &str = "arduino_firmata";

/// Ampel-Notifier: drei LEDs (Rot, Gelb, Grün) an einem Firmata-Board
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `C: DigitalWrite` ermöglicht:
/// - Real Hardware (`FirmataBoard`) im Production-Code
/// - Mock Implementation in Tests
pub struct LedNotifier<C> {
    connection: C,
    options: NotifierOptions,
}

impl<C: DigitalWrite> LedNotifier<C> {
    /// Verbindet sich über den Connector mit dem Board
    ///
    /// Jeder Fehler des Connectors wird zu `UnavailableError` mit dessen Meldung.
    pub fn connect<K>(connector: &K, options: NotifierOptions) -> Result<Self, UnavailableError>
    where
        K: Connector<Connection = C>,
    {
        info!(
            "Connecting to Firmata device {}",
            options.device().unwrap_or("<auto>")
        );

        match connector.connect(options.device()) {
            Ok(connection) => {
                info!("Connected, pins {:?}", options.pins());
                Ok(Self::from_connection(connection, options))
            }
            Err(e) => {
                warn!("Firmata device unavailable: {}", e);
                Err(UnavailableError::new(e.to_string()))
            }
        }
    }

    /// Nutzt eine bereits geöffnete Verbindung
    pub fn from_connection(connection: C, options: NotifierOptions) -> Self {
        Self {
            connection,
            options,
        }
    }

    pub fn options(&self) -> &NotifierOptions {
        &self.options
    }

    pub fn pins(&self) -> PinMap {
        self.options.pins()
    }

    pub fn device(&self) -> Option<&str> {
        self.options.device()
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Gibt die Verbindung an den Aufrufer zurück
    pub fn into_connection(self) -> C {
        self.connection
    }

    // Gemeinsame Routine für turn_on(), turn_off() und notify()
    fn all_off(&mut self) -> Result<(), C::Error> {
        for pin in self.pins().all() {
            self.connection.digital_write(pin, false)?;
        }
        Ok(())
    }
}

impl<C: DigitalWrite> Notifier for LedNotifier<C> {
    type Error = C::Error;

    fn name(&self) -> &'static str {
        NOTIFIER_NAME
    }

    /// Schaltet alle LEDs aus und danach die LED des Status ein
    ///
    /// Die Nachricht selbst wird nicht angezeigt.
    fn notify(&mut self, _message: &str, options: &NotifyOptions) -> Result<(), Self::Error> {
        debug!("Notify: {}", options.status);
        self.all_off()?;

        if let Some(pin) = pin_for_status(self.pins(), options.status) {
            self.connection.digital_write(pin, true)?;
        }
        Ok(())
    }

    /// Stellt nur einen sauberen Ausgangszustand her (alle LEDs aus)
    fn turn_on(&mut self) -> Result<(), Self::Error> {
        self.all_off()
    }

    fn turn_off(&mut self) -> Result<(), Self::Error> {
        self.all_off()
    }
}
