use crate::build::Sender;
use crate::types::{Message, Parameter};

/// What a handler sees while it runs: the parsed message and the send primitives.
pub struct Context<'a> {
    message: &'a Message,
    sender: Sender<'a>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(message: &'a Message, sender: Sender<'a>) -> Self {
        Self { message, sender }
    }

    /// The message being dispatched. The borrow is independent of `self`.
    #[must_use]
    pub fn message(&self) -> &'a Message {
        self.message
    }

    #[must_use]
    pub fn command(&self) -> &'a str {
        self.message.command()
    }

    #[must_use]
    pub fn params(&self) -> &'a [Parameter] {
        self.message.params()
    }

    #[must_use]
    pub fn param(&self, index: usize) -> Option<&'a Parameter> {
        self.message.param(index)
    }

    #[must_use]
    pub fn param_count(&self) -> usize {
        self.message.param_count()
    }

    #[must_use]
    pub fn raw_message(&self) -> &'a str {
        self.message.raw()
    }

    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.sender.is_debug()
    }

    /// Full access to the send primitives, ACK helpers included.
    pub fn sender(&mut self) -> &mut Sender<'a> {
        &mut self.sender
    }

    pub fn send_command(
        &mut self,
        header: &str,
        body: &str,
        identifier: &str,
        params: &[Parameter],
    ) -> usize {
        self.sender.send_command(header, body, identifier, params)
    }

    pub fn send_debug(&mut self, body: &str, identifier: &str) -> usize {
        self.sender.send_debug(body, identifier)
    }

    pub fn send_error(&mut self, body: &str, identifier: &str) -> usize {
        self.sender.send_error(body, identifier)
    }

    pub fn send_ack_ok(&mut self, command: &str, params: &[Parameter]) -> usize {
        self.sender.send_ack_ok(command, params)
    }

    pub fn send_ack_err(&mut self, command: &str, error: &str, params: &[Parameter]) -> usize {
        self.sender.send_ack_err(command, error, params)
    }

    pub(crate) fn set_debug(&mut self, on: bool) {
        self.sender.set_debug(on);
    }
}
