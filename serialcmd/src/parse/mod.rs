//! Incremental, byte-at-a-time message parser.
//!
//! The parser owns the message buffers and nothing else: it never touches the
//! transport, the clock or the registry. The [`Manager`](crate::Manager) feeds it
//! bytes and acts on the returned [`Feed`].

pub mod class;

use tracing::trace;

use crate::config::Config;
use crate::error::{ParseError, ParseErrorKind};
use crate::types::{Message, Parameter};

pub use self::class::{ByteClass, Delimiters};

/// Parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// No message in progress.
    #[default]
    Idle,
    ReadingCommand,
    ReadingParamKey,
    ReadingParamValue,
    /// Terminator seen; the message is ready for dispatch.
    MessageComplete,
    /// The message was abandoned. Bytes are dropped until the next terminator.
    Error(ParseErrorKind),
}

impl ParseState {
    /// True while a message is partially received.
    #[must_use]
    pub fn in_progress(self) -> bool {
        matches!(
            self,
            ParseState::ReadingCommand | ParseState::ReadingParamKey | ParseState::ReadingParamValue
        )
    }
}

/// Result of feeding one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// More bytes are needed.
    Pending,
    /// The terminator completed a message.
    Complete,
    /// The message was discarded.
    Rejected(ParseError),
}

/// Limits copied out of the [`Config`] at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Limits {
    message: usize,
    command: usize,
    params: usize,
    key: usize,
    value: usize,
}

/// Incremental message parser.
#[derive(Debug, Clone)]
pub struct Parser {
    delimiters: Delimiters,
    limits: Limits,
    state: ParseState,
    message: Message,
    /// Whether the current separator opened a slot; false once the count is exhausted.
    slot_open: bool,
}

impl Parser {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            delimiters: Delimiters::from_config(config),
            limits: Limits {
                message: config.max_message_len,
                command: config.max_command_len,
                params: config.max_param_count,
                key: config.max_param_key_len,
                value: config.max_param_value_len,
            },
            state: ParseState::Idle,
            message: Message::new(),
            slot_open: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// True while a message is partially received.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.state.in_progress()
    }

    /// The message being assembled, or the last one completed.
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Whether the next byte starts a new message.
    #[must_use]
    pub fn at_message_start(&self) -> bool {
        matches!(self.state, ParseState::Idle | ParseState::MessageComplete)
    }

    /// True while the rest of a rejected line is being dropped.
    #[must_use]
    pub fn discarding(&self) -> bool {
        matches!(self.state, ParseState::Error(_))
    }

    /// Feeds one byte.
    pub fn feed(&mut self, byte: u8) -> Feed {
        if self.discarding() {
            if self.delimiters.classify(byte) == ByteClass::Terminator {
                self.reset();
            }
            return Feed::Pending;
        }
        if self.at_message_start() {
            self.begin();
        }

        let position = self.message.raw.len();
        if self.message.raw.push_byte(byte, self.limits.message).is_err() {
            return self.reject(ParseErrorKind::MessageTooLong, position);
        }

        match self.delimiters.classify(byte) {
            ByteClass::Terminator => {
                self.finish();
                Feed::Complete
            }
            ByteClass::CommandSeparator => {
                self.open_slot();
                Feed::Pending
            }
            ByteClass::ParamSeparator => {
                if self.state == ParseState::ReadingParamKey && self.slot_open {
                    self.enter(ParseState::ReadingParamValue);
                }
                Feed::Pending
            }
            ByteClass::Content => match self.append(byte) {
                Ok(()) => Feed::Pending,
                Err(kind) => self.reject(kind, position),
            },
        }
    }

    /// Returns to `Idle`, keeping the last completed message readable.
    ///
    /// Also ends discarding, so the next byte starts a new message.
    pub fn reset(&mut self) {
        self.enter(ParseState::Idle);
        self.slot_open = false;
    }

    /// Discards the in-progress message and drops the rest of its line.
    pub fn abort(&mut self, kind: ParseErrorKind) {
        self.message.clear();
        self.slot_open = false;
        self.enter(ParseState::Error(kind));
    }

    fn begin(&mut self) {
        self.message.clear();
        self.slot_open = false;
        self.enter(ParseState::ReadingCommand);
    }

    fn reject(&mut self, kind: ParseErrorKind, position: usize) -> Feed {
        self.abort(kind);
        Feed::Rejected(ParseError::new(kind, position))
    }

    fn open_slot(&mut self) {
        self.slot_open = self.message.params.len() < self.limits.params
            && self.message.params.push(Parameter::default()).is_ok();
        self.enter(ParseState::ReadingParamKey);
    }

    fn append(&mut self, byte: u8) -> Result<(), ParseErrorKind> {
        match self.state {
            ParseState::ReadingCommand => self
                .message
                .command
                .push_byte(byte, self.limits.command)
                .map_err(|_| ParseErrorKind::CommandTooLong),
            ParseState::ReadingParamKey | ParseState::ReadingParamValue if self.slot_open => {
                let reading_key = self.state == ParseState::ReadingParamKey;
                let Some(param) = self.message.params.last_mut() else {
                    return Ok(());
                };
                if reading_key {
                    param
                        .key
                        .push_byte(byte, self.limits.key)
                        .map_err(|_| ParseErrorKind::KeyTooLong)
                } else {
                    param
                        .value
                        .push_byte(byte, self.limits.value)
                        .map_err(|_| ParseErrorKind::ValueTooLong)
                }
            }
            // Slot dropped past the parameter limit.
            _ => Ok(()),
        }
    }

    fn finish(&mut self) {
        let command = &mut self.message.command;
        command.trim();
        if command.strip_suffix_byte(self.delimiters.terminator) {
            command.trim();
        }
        self.slot_open = false;
        self.enter(ParseState::MessageComplete);
    }

    fn enter(&mut self, state: ParseState) {
        if self.state != state {
            trace!(from = ?self.state, to = ?state, "parser state");
            self.state = state;
        }
    }
}
