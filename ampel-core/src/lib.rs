//! Ampel Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Typen, Pure Functions und den `LedNotifier`.

#![no_std]

extern crate alloc;

pub mod logic;
pub mod notifier;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::pin_for_status;
pub use notifier::{LedNotifier, NOTIFIER_NAME};
pub use traits::{Connector, DigitalWrite, Notifier, UnavailableError, UnknownStatusError};
pub use types::{
    DEFAULT_GREEN_PIN, DEFAULT_PINS, DEFAULT_RED_PIN, DEFAULT_YELLOW_PIN, NotifierOptions,
    NotifyOptions, PinMap, StatusType,
};
