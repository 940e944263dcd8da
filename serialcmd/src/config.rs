use core::time::Duration;

use crate::consts::{
    DEFAULT_COMMAND_SEPARATOR, DEFAULT_PARAM_SEPARATOR, DEFAULT_TERMINATOR, DEFAULT_TIMEOUT_MS,
    MAX_COMMAND_LEN, MAX_MESSAGE_LEN, MAX_PARAM_KEY_LEN, MAX_PARAM_VALUE_LEN, MAX_PARAMETERS,
};
use crate::error::ConfigError;

/// What the dispatcher does when a matching route reports "not handled".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchPolicy {
    /// The first matching route consumes the message, whatever it returns.
    #[default]
    FirstMatch,
    /// A route returning `false` passes the message on to the next matching route.
    ContinueOnUnhandled,
}

/// Manager configuration. Fixed once the manager is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub terminator: u8,
    pub command_separator: u8,
    pub param_separator: u8,
    /// Longest allowed silence between two bytes of the same message.
    pub timeout: Duration,
    pub max_message_len: usize,
    pub max_command_len: usize,
    pub max_param_count: usize,
    pub max_param_key_len: usize,
    pub max_param_value_len: usize,
    pub dispatch: DispatchPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terminator: DEFAULT_TERMINATOR,
            command_separator: DEFAULT_COMMAND_SEPARATOR,
            param_separator: DEFAULT_PARAM_SEPARATOR,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_message_len: MAX_MESSAGE_LEN,
            max_command_len: MAX_COMMAND_LEN,
            max_param_count: MAX_PARAMETERS,
            max_param_key_len: MAX_PARAM_KEY_LEN,
            max_param_value_len: MAX_PARAM_VALUE_LEN,
            dispatch: DispatchPolicy::FirstMatch,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_separators(mut self, terminator: u8, command: u8, param: u8) -> Self {
        self.terminator = terminator;
        self.command_separator = command;
        self.param_separator = param;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_message_len(mut self, len: usize) -> Self {
        self.max_message_len = len;
        self
    }

    #[must_use]
    pub fn with_max_command_len(mut self, len: usize) -> Self {
        self.max_command_len = len;
        self
    }

    #[must_use]
    pub fn with_max_params(mut self, count: usize, key_len: usize, value_len: usize) -> Self {
        self.max_param_count = count;
        self.max_param_key_len = key_len;
        self.max_param_value_len = value_len;
        self
    }

    #[must_use]
    pub fn with_dispatch(mut self, policy: DispatchPolicy) -> Self {
        self.dispatch = policy;
        self
    }

    /// Timeout in whole milliseconds, saturating.
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Checks separators and that every limit fits the storage behind it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for byte in [self.terminator, self.command_separator, self.param_separator] {
            if byte == 0 || !byte.is_ascii() {
                return Err(ConfigError::InvalidSeparator(byte));
            }
        }
        if self.terminator == self.command_separator
            || self.terminator == self.param_separator
            || self.command_separator == self.param_separator
        {
            return Err(ConfigError::SeparatorClash);
        }

        let limits = [
            ("max_message_len", self.max_message_len, MAX_MESSAGE_LEN),
            ("max_command_len", self.max_command_len, MAX_COMMAND_LEN),
            ("max_param_count", self.max_param_count, MAX_PARAMETERS),
            ("max_param_key_len", self.max_param_key_len, MAX_PARAM_KEY_LEN),
            ("max_param_value_len", self.max_param_value_len, MAX_PARAM_VALUE_LEN),
        ];
        for (field, value, capacity) in limits {
            if value == 0 {
                return Err(ConfigError::ZeroLimit(field));
            }
            if value > capacity {
                return Err(ConfigError::LimitExceedsCapacity {
                    field,
                    value,
                    capacity,
                });
            }
        }
        Ok(())
    }

    /// True for the terminator and the CR/LF line-break bytes.
    pub(crate) fn is_line_end(&self, byte: u8) -> bool {
        byte == self.terminator || byte == b'\r' || byte == b'\n'
    }
}
