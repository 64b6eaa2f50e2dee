//! Konfigurations-Tests (serde Feature von ampel-core)

use ampel_core::{DEFAULT_PINS, NotifierOptions, NotifyOptions, PinMap, StatusType};

#[test]
fn test_empty_config_uses_defaults() {
    let options: NotifierOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, NotifierOptions::default());
    assert_eq!(options.pins(), DEFAULT_PINS);
    assert_eq!(options.device(), None);
}

#[test]
fn test_partial_config_merges_with_defaults() {
    let options: NotifierOptions =
        serde_json::from_str(r#"{ "device": "/dev/ttyUSB0", "red": 13 }"#).unwrap();

    assert_eq!(options.device(), Some("/dev/ttyUSB0"));
    assert_eq!(
        options.pins(),
        PinMap {
            red: 13,
            yellow: 10,
            green: 9
        }
    );
}

#[test]
fn test_full_config() {
    let options: NotifierOptions = serde_json::from_str(
        r#"{ "device": "/dev/ttyACM0", "red": 13, "yellow": 7, "green": 1 }"#,
    )
    .unwrap();

    let expected = NotifierOptions::default()
        .with_device("/dev/ttyACM0")
        .with_red(13)
        .with_yellow(7)
        .with_green(1);
    assert_eq!(options, expected);
}

#[test]
fn test_invalid_pin_type_is_rejected() {
    let result: Result<NotifierOptions, _> = serde_json::from_str(r#"{ "red": "eleven" }"#);
    assert!(result.is_err());
}

#[test]
fn test_notify_options_use_type_key() {
    let options: NotifyOptions = serde_json::from_str(r#"{ "type": "pending" }"#).unwrap();
    assert_eq!(options.status, StatusType::Pending);

    let json = serde_json::to_string(&NotifyOptions::new(StatusType::Failed)).unwrap();
    assert_eq!(json, r#"{"type":"failed"}"#);
}

#[test]
fn test_unknown_status_type_is_rejected() {
    let result: Result<NotifyOptions, _> = serde_json::from_str(r#"{ "type": "blinking" }"#);
    assert!(result.is_err());
}
