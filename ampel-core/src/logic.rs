//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{PinMap, StatusType};

/// Liefert den Pin, der für einen Status eingeschaltet wird
///
/// `Notify` schaltet keine LED ein.
///
/// # Beispiele
///
/// ```
/// # use ampel_core::{pin_for_status, StatusType, DEFAULT_PINS};
/// assert_eq!(pin_for_status(DEFAULT_PINS, StatusType::Failed), Some(11));
/// assert_eq!(pin_for_status(DEFAULT_PINS, StatusType::Notify), None);
/// ```
pub fn pin_for_status(pins: PinMap, status: StatusType) -> Option<u8> {
    match status {
        StatusType::Success => Some(pins.green),
        StatusType::Pending => Some(pins.yellow),
        StatusType::Failed => Some(pins.red),
        StatusType::Notify => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_PINS;

    #[test]
    fn test_success_is_green() {
        assert_eq!(pin_for_status(DEFAULT_PINS, StatusType::Success), Some(9));
    }

    #[test]
    fn test_pending_is_yellow() {
        assert_eq!(pin_for_status(DEFAULT_PINS, StatusType::Pending), Some(10));
    }

    #[test]
    fn test_failed_is_red() {
        assert_eq!(pin_for_status(DEFAULT_PINS, StatusType::Failed), Some(11));
    }

    #[test]
    fn test_custom_pins() {
        let pins = PinMap {
            red: 13,
            yellow: 7,
            green: 1,
        };
        assert_eq!(pin_for_status(pins, StatusType::Failed), Some(13));
        assert_eq!(pin_for_status(pins, StatusType::Pending), Some(7));
        assert_eq!(pin_for_status(pins, StatusType::Success), Some(1));
        assert_eq!(pin_for_status(pins, StatusType::Notify), None);
    }
}
