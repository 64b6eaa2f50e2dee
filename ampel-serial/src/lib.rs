// Library-Root: Ampel-Notifier über einen seriellen Firmata-Port

// Module
pub mod config;
pub mod hal;

// Re-exports von ampel-core
pub use ampel_core::{
    Connector, DigitalWrite, LedNotifier, Notifier, NotifierOptions, NotifyOptions, PinMap,
    StatusType, UnavailableError,
};

pub use hal::{FirmataBoard, SerialConnector, SerialError};

/// Notifier mit echtem Firmata-Board
pub type SerialNotifier = LedNotifier<FirmataBoard>;

/// Verbindet sich mit Standard-Einstellungen (57600 Baud, 2s Boot-Wartezeit)
///
/// Ohne `device` in den Optionen wird der erste USB-Seriell-Port verwendet.
/// Schlägt fehl, wenn kein Port gefunden, der Port nicht geöffnet werden kann
/// oder kein Firmata-Board antwortet.
pub fn connect(options: NotifierOptions) -> Result<SerialNotifier, UnavailableError> {
    LedNotifier::connect(&SerialConnector::default(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_missing_device_is_unavailable() {
        let result = connect(NotifierOptions::default().with_device("/dev/does-not-exist"));

        let err = result.err().expect("construction must fail");
        assert!(!err.message.is_empty());
        assert!(err.message.starts_with("serial port error"));
    }

    #[test]
    fn test_no_device_message_reaches_caller() {
        let err = UnavailableError::new(SerialError::NoDevice.to_string());
        assert_eq!(err.message, "no USB serial device found");
    }
}
