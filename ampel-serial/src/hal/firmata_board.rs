// Firmata Board: digitale Ausgänge über das `firmata` Crate
//
// Das Protokoll (Handshake, Pin-Modi, Digital-Messages) liegt komplett im
// `firmata` Crate. Hier wird nur der Pin-Modus einmal pro Pin gesetzt.

use std::collections::HashSet;

use ampel_core::DigitalWrite;
use log::{debug, info};
use serialport::SerialPort;

use crate::hal::SerialError;

/// Firmata-Board an einem seriellen Port
pub struct FirmataBoard {
    board: firmata::Board,
    // Pins, die bereits als Output konfiguriert sind
    output_pins: HashSet<u8>,
}

impl FirmataBoard {
    /// Initialisiert das Board über einen geöffneten Port
    ///
    /// `firmata::Board::new` fragt Firmware und Protokoll-Version ab.
    /// Antwortet das Gerät nicht (kein Firmata, falsches Gerät), schlägt
    /// der Aufruf nach dem Port-Timeout fehl.
    pub fn open(port: Box<dyn SerialPort>) -> Result<Self, SerialError> {
        let board = firmata::Board::new(Box::new(port)).map_err(SerialError::handshake)?;
        info!(
            "Firmata: {} (firmware {}, protocol {})",
            board.firmware_name(),
            board.firmware_version(),
            board.protocol_version()
        );

        Ok(Self {
            board,
            output_pins: HashSet::new(),
        })
    }

    fn ensure_output(&mut self, pin: u8) -> Result<(), SerialError> {
        if !self.output_pins.contains(&pin) {
            debug!("Firmata: pin {} -> OUTPUT", pin);
            self.board
                .set_pin_mode(pin.into(), firmata::OUTPUT)
                .map_err(SerialError::firmata)?;
            self.output_pins.insert(pin);
        }
        Ok(())
    }
}

impl DigitalWrite for FirmataBoard {
    type Error = SerialError;

    fn digital_write(&mut self, pin: u8, value: bool) -> Result<(), SerialError> {
        self.ensure_output(pin)?;
        self.board
            .digital_write(pin.into(), u8::from(value).into())
            .map_err(SerialError::firmata)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, unix))]
mod tests {
    use std::time::{Duration, Instant};

    use serialport::TTYPort;

    use super::*;

    #[test]
    fn test_silent_device_fails_handshake() {
        // Pseudo-Terminal: die Gegenseite bleibt offen, antwortet aber nie
        let (mut port, _silent_peer) = TTYPort::pair().expect("pty pair");
        port.set_timeout(Duration::from_millis(200)).unwrap();

        let started = Instant::now();
        let result = FirmataBoard::open(Box::new(port));

        assert!(matches!(result, Err(SerialError::Handshake(_))));
        assert!(started.elapsed() < Duration::from_secs(30));
    }
}
