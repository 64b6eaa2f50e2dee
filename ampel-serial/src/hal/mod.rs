// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Port und Firmata-Board hinter den Traits aus ampel-core,
// damit der Notifier ohne Hardware getestet werden kann.

pub mod connector;
pub mod firmata_board;

pub use connector::{SerialConnector, pick_port, select_device};
pub use firmata_board::FirmataBoard;

/// Fehler-Typ für Serial- und Firmata-Operationen
#[derive(Debug, thiserror::Error)]
pub enum SerialError {
    #[error("no USB serial device found")]
    NoDevice,

    #[error("serial port error: {0}")]
    Open(#[from] serialport::Error),

    #[error("no Firmata board answered: {0}")]
    Handshake(String),

    #[error("Firmata error: {0}")]
    Firmata(String),
}

impl SerialError {
    // Fehler des firmata Crates werden als Text übernommen
    pub(crate) fn handshake(e: impl core::fmt::Debug) -> Self {
        SerialError::Handshake(format!("{e:?}"))
    }

    pub(crate) fn firmata(e: impl core::fmt::Debug) -> Self {
        SerialError::Firmata(format!("{e:?}"))
    }
}
