// Serial Connector: öffnet den Port zum Arduino
//
// Ohne angegebenes Gerät wird der erste USB-Seriell-Port genommen.

use std::thread;
use std::time::Duration;

use ampel_core::Connector;
use log::{debug, info};
use serialport::{SerialPortInfo, SerialPortType};

use crate::config::{DEFAULT_BAUD_RATE, DEFAULT_BOOT_DELAY, DEFAULT_TIMEOUT, USB_PORT_PATTERNS};
use crate::hal::{FirmataBoard, SerialError};

/// Öffnet Firmata-Verbindungen über `serialport`
#[derive(Debug, Clone)]
pub struct SerialConnector {
    baud_rate: u32,
    timeout: Duration,
    boot_delay: Duration,
}

impl Default for SerialConnector {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_TIMEOUT,
            boot_delay: DEFAULT_BOOT_DELAY,
        }
    }
}

impl SerialConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Wartezeit nach dem Öffnen (0 für Boards ohne Auto-Reset)
    pub fn with_boot_delay(mut self, boot_delay: Duration) -> Self {
        self.boot_delay = boot_delay;
        self
    }

    fn detect_device(&self) -> Result<String, SerialError> {
        let ports = serialport::available_ports()?;
        debug!("Serial: {} ports available", ports.len());
        select_device(&ports)
    }
}

impl Connector for SerialConnector {
    type Connection = FirmataBoard;
    type Error = SerialError;

    /// Öffnet den Port und wartet auf die Antwort des Firmata-Boards
    fn connect(&self, device: Option<&str>) -> Result<FirmataBoard, SerialError> {
        let path = match device {
            Some(path) => path.to_string(),
            None => {
                let path = self.detect_device()?;
                info!("Serial: auto-selected {}", path);
                path
            }
        };

        let port = serialport::new(path.as_str(), self.baud_rate)
            .timeout(self.timeout)
            .open()?;
        info!("Serial: opened {} @ {} baud", path, self.baud_rate);

        if !self.boot_delay.is_zero() {
            debug!("Serial: waiting {:?} for board reset", self.boot_delay);
            thread::sleep(self.boot_delay);
        }

        FirmataBoard::open(port)
    }
}

/// Wie `pick_port`, aber ohne Treffer ein `SerialError::NoDevice`
pub fn select_device(ports: &[SerialPortInfo]) -> Result<String, SerialError> {
    pick_port(ports).ok_or(SerialError::NoDevice)
}

/// Wählt den ersten USB-Seriell-Port
///
/// Ports mit bekanntem USB-Typ haben Vorrang, danach wird nach typischen
/// Gerätenamen gesucht.
pub fn pick_port(ports: &[SerialPortInfo]) -> Option<String> {
    ports
        .iter()
        .find(|info| matches!(info.port_type, SerialPortType::UsbPort(_)))
        .or_else(|| {
            ports.iter().find(|info| {
                USB_PORT_PATTERNS
                    .iter()
                    .any(|pattern| info.port_name.contains(pattern))
            })
        })
        .map(|info| info.port_name.clone())
}

// ============================================================================
// Tests
// ============================================================================
