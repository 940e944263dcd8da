//! The polling entry point: reads the transport, parses, times out and dispatches.

use tracing::{debug, trace, warn};

use crate::build::Sender;
use crate::config::{Config, DispatchPolicy};
use crate::consts::{MANAGER_IDENTIFIER, RAW_MESSAGE_IDENTIFIER};
use crate::dispatch::{CommandFn, CommandHandler, Context, Fallback, Outcome, Registry};
use crate::error::{ConfigError, ParseError, ParseErrorKind, RegisterError};
use crate::parse::{Feed, ParseState, Parser};
use crate::timeout::TimeoutMonitor;
use crate::transport::{Clock, Transport};
use crate::types::{Message, Parameter};

/// Incremental command manager over a transport.
///
/// Call [`poll`](Self::poll) repeatedly from the main loop. Each call drains the
/// bytes already available, dispatches every message they complete, and then
/// checks the inter-byte timeout. It never blocks.
pub struct Manager<'h, T: Transport, C: Clock> {
    transport: T,
    clock: C,
    config: Config,
    parser: Parser,
    monitor: TimeoutMonitor,
    registry: Registry<'h>,
    fallback: Option<Fallback>,
    debug: bool,
}

impl<'h, T: Transport, C: Clock> Manager<'h, T, C> {
    /// Builds a manager. The configuration is validated and fixed from here on.
    pub fn new(transport: T, clock: C, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            transport,
            clock,
            parser: Parser::new(&config),
            monitor: TimeoutMonitor::new(config.timeout_ms()),
            config,
            registry: Registry::new(),
            fallback: None,
            debug: false,
        })
    }

    /// Sets the callback for messages no route takes.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Routes `command` to a closure. See [`command_fn`](crate::command_fn).
    pub fn register(
        &mut self,
        command: &str,
        behavior: &'h mut CommandFn<'h>,
    ) -> Result<(), RegisterError> {
        self.registry.register(command, behavior)
    }

    /// Routes every command `handler` supports to it.
    pub fn add_handler(&mut self, handler: &'h mut dyn CommandHandler) -> Result<(), RegisterError> {
        self.registry.add_handler(handler)
    }

    /// Removes the first closure route for `command`. Returns whether one was found.
    pub fn unregister(&mut self, command: &str) -> bool {
        self.registry.unregister(command)
    }

    /// Drains available bytes, dispatching each completed message, then checks the timeout.
    ///
    /// Returns the number of messages dispatched.
    pub fn poll(&mut self) -> usize {
        let mut completed = 0;

        while self.transport.available() > 0 {
            let Some(byte) = self.transport.read_byte() else {
                break;
            };
            if self.parser.at_message_start() {
                self.monitor.message_started();
            }
            self.monitor.touch(self.clock.now_ms());

            match self.parser.feed(byte) {
                Feed::Pending => {}
                Feed::Complete => {
                    self.dispatch();
                    self.parser.reset();
                    completed += 1;
                }
                Feed::Rejected(err) => self.report(err),
            }
        }

        self.check_timeout();
        completed
    }

    /// Aborts the in-progress message if the line has been silent too long.
    ///
    /// A rejected line whose terminator never arrives is dropped silently.
    fn check_timeout(&mut self) {
        let state = self.parser.state();
        if !state.in_progress() && !self.parser.discarding() {
            return;
        }
        if !self.monitor.expired(self.clock.now_ms()) {
            return;
        }
        if let ParseState::Error(kind) = state {
            trace!(%kind, "line went silent while discarding");
            self.parser.reset();
            return;
        }
        let position = self.parser.message().raw().len();
        self.parser.abort(ParseErrorKind::Timeout);
        self.monitor.mark_timed_out();
        self.report(ParseError::new(ParseErrorKind::Timeout, position));
        self.parser.reset();
    }

    /// Sends the `ERR` line for `err`. The parser drops the rest of the line.
    fn report(&mut self, err: ParseError) {
        warn!(%err, "message discarded");
        self.sender().send_error(err.kind.wire_text(), MANAGER_IDENTIFIER);
    }

    /// Routes the completed message, falling back when no route takes it.
    fn dispatch(&mut self) {
        let Self {
            transport,
            config,
            parser,
            registry,
            fallback,
            debug,
            ..
        } = self;
        let message = parser.message();
        let mut ctx = Context::new(message, Sender::new(transport, config, debug));
        ctx.send_debug(message.raw(), RAW_MESSAGE_IDENTIFIER);

        let outcome = registry.dispatch(config.dispatch, &mut ctx);
        debug!(command = message.command(), ?outcome, "dispatched");

        let unclaimed = match outcome {
            Outcome::Handled => false,
            Outcome::NoMatch => true,
            Outcome::Declined => config.dispatch == DispatchPolicy::ContinueOnUnhandled,
        };
        if unclaimed {
            if let Some(fallback) = *fallback {
                fallback(&mut ctx);
            }
        }
    }

    /// Send primitives for use outside a handler.
    pub fn sender(&mut self) -> Sender<'_> {
        Sender::new(&mut self.transport, &self.config, &mut self.debug)
    }

    pub fn send_command(
        &mut self,
        header: &str,
        body: &str,
        identifier: &str,
        params: &[Parameter],
    ) -> usize {
        self.sender().send_command(header, body, identifier, params)
    }

    pub fn send_debug(&mut self, body: &str, identifier: &str) -> usize {
        self.sender().send_debug(body, identifier)
    }

    pub fn send_error(&mut self, body: &str, identifier: &str) -> usize {
        self.sender().send_error(body, identifier)
    }

    #[must_use]
    pub fn state(&self) -> ParseState {
        self.parser.state()
    }

    /// True from a timeout abort until the next message starts.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.monitor.timed_out()
    }

    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// The last completed message, or the one being received.
    #[must_use]
    pub fn message(&self) -> &Message {
        self.parser.message()
    }

    #[must_use]
    pub fn command(&self) -> &str {
        self.parser.message().command()
    }

    #[must_use]
    pub fn params(&self) -> &[Parameter] {
        self.parser.message().params()
    }

    #[must_use]
    pub fn param(&self, index: usize) -> Option<&Parameter> {
        self.parser.message().param(index)
    }

    #[must_use]
    pub fn param_count(&self) -> usize {
        self.parser.message().param_count()
    }

    #[must_use]
    pub fn raw_message(&self) -> &str {
        self.parser.message().raw()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &Registry<'h> {
        &self.registry
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the manager, releasing the handler borrows.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
