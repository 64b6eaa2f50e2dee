// Projekt-Konfiguration: Konstanten für den Serial-Port

use std::time::Duration;

// ============================================================================
// Serial-Port Konfiguration
// ============================================================================

/// Baudrate von StandardFirmata
pub const DEFAULT_BAUD_RATE: u32 = 57_600;

/// Timeout für Lese-/Schreiboperationen auf dem Port
/// Begrenzt auch das Warten auf die Antwort des Firmata-Boards
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Wartezeit nach dem Öffnen des Ports
/// Viele Arduinos machen beim Öffnen einen Reset und brauchen etwa 2s zum Booten
pub const DEFAULT_BOOT_DELAY: Duration = Duration::from_secs(2);

/// Namensbestandteile von USB-Seriell-Ports (Linux, macOS)
/// Wird nur genutzt, wenn der Port-Typ nicht bekannt ist (z.B. ohne libudev)
pub const USB_PORT_PATTERNS: [&str; 4] = ["ttyUSB", "ttyACM", "usbmodem", "usbserial"];
