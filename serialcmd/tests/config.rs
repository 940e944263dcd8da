mod common;

use core::time::Duration;

use common::MockSerial;
use serialcmd::consts::{MAX_MESSAGE_LEN, MAX_PARAMETERS};
use serialcmd::{Config, ConfigError, DispatchPolicy, Manager, ManualClock};

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.terminator, b'\n');
    assert_eq!(config.command_separator, b':');
    assert_eq!(config.param_separator, b'=');
    assert_eq!(config.timeout_ms(), 500);
    assert_eq!(config.max_param_count, MAX_PARAMETERS);
    assert_eq!(config.dispatch, DispatchPolicy::FirstMatch);
}

#[test]
fn separators_must_differ() {
    let config = Config::default().with_separators(b'\n', b'=', b'=');
    assert_eq!(config.validate(), Err(ConfigError::SeparatorClash));
    let config = Config::default().with_separators(b':', b':', b'=');
    assert_eq!(config.validate(), Err(ConfigError::SeparatorClash));
}

#[test]
fn separators_must_be_ascii() {
    let config = Config::default().with_separators(b'\n', 0, b'=');
    assert_eq!(config.validate(), Err(ConfigError::InvalidSeparator(0)));
    let config = Config::default().with_separators(0xA7, b':', b'=');
    assert_eq!(config.validate(), Err(ConfigError::InvalidSeparator(0xA7)));
}

#[test]
fn limits_must_be_non_zero() {
    let config = Config::default().with_max_params(0, 10, 32);
    assert_eq!(config.validate(), Err(ConfigError::ZeroLimit("max_param_count")));
}

#[test]
fn limits_must_fit_capacity() {
    let config = Config::default().with_max_message_len(MAX_MESSAGE_LEN + 1);
    assert_eq!(
        config.validate(),
        Err(ConfigError::LimitExceedsCapacity {
            field: "max_message_len",
            value: MAX_MESSAGE_LEN + 1,
            capacity: MAX_MESSAGE_LEN,
        })
    );
}

#[test]
fn manager_rejects_invalid_config() {
    let clock = ManualClock::new(0);
    let config = Config::default().with_max_command_len(0);
    let err = Manager::new(MockSerial::new(), &clock, config).err();
    assert_eq!(err, Some(ConfigError::ZeroLimit("max_command_len")));
}

#[test]
fn timeout_ms_saturates() {
    let config = Config::default().with_timeout(Duration::MAX);
    assert_eq!(config.timeout_ms(), u64::MAX);
    let config = Config::default().with_timeout(Duration::from_micros(1_999));
    assert_eq!(config.timeout_ms(), 1);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        ConfigError::InvalidSeparator(0).to_string(),
        "separator byte 0x00 is not a non-NUL ASCII byte"
    );
    assert_eq!(
        ConfigError::ZeroLimit("max_param_count").to_string(),
        "max_param_count must be non-zero"
    );
}
