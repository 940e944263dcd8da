use core::fmt::{self, Write};

use heapless::Vec;

use crate::consts::{MAX_COMMAND_LEN, MAX_MESSAGE_LEN, MAX_PARAM_KEY_LEN, MAX_PARAM_VALUE_LEN, MAX_PARAMETERS};
use crate::field::Field;

/// Command token storage.
pub type CommandField = Field<MAX_COMMAND_LEN>;

/// Raw message storage.
pub type RawField = Field<MAX_MESSAGE_LEN>;

/// A single key/value parameter. Parameters are unique by position only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    pub key: Field<MAX_PARAM_KEY_LEN>,
    pub value: Field<MAX_PARAM_VALUE_LEN>,
}

impl Parameter {
    /// Builds a parameter, truncating `key` and `value` to their capacities.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: Field::truncated(key),
            value: Field::truncated(value),
        }
    }

    /// Builds a parameter from anything printable, e.g. `Parameter::from_display(3, 255)`.
    ///
    /// Output that does not fit is truncated.
    #[must_use]
    pub fn from_display(key: impl fmt::Display, value: impl fmt::Display) -> Self {
        let mut param = Self::default();
        // Field's writer truncates instead of failing.
        let _ = write!(param.key, "{key}");
        let _ = write!(param.value, "{value}");
        param
    }
}

/// The message currently being assembled, or the last one completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub(crate) raw: RawField,
    pub(crate) command: CommandField,
    pub(crate) params: Vec<Parameter, MAX_PARAMETERS>,
}

impl Message {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: Field::new(),
            command: Field::new(),
            params: Vec::new(),
        }
    }

    /// The command token, trimmed of surrounding whitespace.
    #[must_use]
    pub fn command(&self) -> &str {
        self.command.as_str()
    }

    /// The message exactly as received, terminator included.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    /// Parameters in the order they were received.
    #[must_use]
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    #[must_use]
    pub fn param(&self, index: usize) -> Option<&Parameter> {
        self.params.get(index)
    }

    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Value of the first parameter whose key equals `key`.
    #[must_use]
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    pub(crate) fn clear(&mut self) {
        self.raw.clear();
        self.command.clear();
        self.params.clear();
    }
}
