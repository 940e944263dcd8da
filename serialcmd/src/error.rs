use thiserror::Error;

use crate::consts::MAX_COMMAND_LEN;

/// Specific kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Raw message exceeds the configured maximum length.
    #[error("message too long")]
    MessageTooLong,
    /// Command token exceeds the configured maximum length.
    #[error("command too long")]
    CommandTooLong,
    /// Parameter key exceeds the configured maximum length.
    #[error("parameter key too long")]
    KeyTooLong,
    /// Parameter value exceeds the configured maximum length.
    #[error("parameter value too long")]
    ValueTooLong,
    /// No byte arrived within the timeout while a message was in progress.
    #[error("timeout")]
    Timeout,
}

impl ParseErrorKind {
    /// Text sent on the wire in the `ERR` line reporting this error.
    #[must_use]
    pub fn wire_text(self) -> &'static str {
        match self {
            ParseErrorKind::MessageTooLong => "Too Long",
            ParseErrorKind::CommandTooLong => "Command Too Long",
            ParseErrorKind::KeyTooLong => "Param Key Too Long",
            ParseErrorKind::ValueTooLong => "Param Value Too Long",
            ParseErrorKind::Timeout => "Timeout",
        }
    }
}

/// Error raised while assembling an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Offset into the raw message where the error was detected.
    pub position: usize,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Error returned when a [`Config`](crate::Config) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Terminator, command separator and parameter separator must differ.
    #[error("terminator and separators must be distinct bytes")]
    SeparatorClash,
    /// Separator is NUL or outside ASCII.
    #[error("separator byte {0:#04x} is not a non-NUL ASCII byte")]
    InvalidSeparator(u8),
    /// A length or count limit is zero.
    #[error("{0} must be non-zero")]
    ZeroLimit(&'static str),
    /// A length or count limit is larger than the storage behind it.
    #[error("{field} of {value} exceeds capacity {capacity}")]
    LimitExceedsCapacity {
        field: &'static str,
        value: usize,
        capacity: usize,
    },
}

/// Error returned when a route cannot be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Command token is empty or whitespace.
    #[error("command token is empty")]
    EmptyCommand,
    /// Command token does not fit a command field.
    #[error("command token longer than {} bytes", MAX_COMMAND_LEN)]
    CommandTooLong,
    /// Handler declares no supported commands.
    #[error("handler supports no commands")]
    NoCommands,
    /// Route table has no free slot.
    #[error("route table is full")]
    RegistryFull,
}

/// Error returned by [`build_line`](crate::build_line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Output buffer is too small.
    #[error("output buffer too small")]
    BufferTooSmall,
}
