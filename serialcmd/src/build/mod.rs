//! Outbound formatting: serializes reply lines onto the transport.

pub mod ack;
mod line;

use crate::config::Config;
use crate::consts::{DEBUG_TAG, ERROR_TAG};
use crate::error::BuildError;
use crate::transport::Transport;
use crate::types::Parameter;

use self::line::{LineWriter, SliceSink, TransportSink};

/// Serialize `HEADER[:BODY][:k=v...][: (ID)]<terminator>` into `buf`.
///
/// Uses the separators and parameter limit of `config`. Returns the number of
/// bytes written.
pub fn build_line(
    config: &Config,
    header: &str,
    body: &str,
    identifier: &str,
    params: &[Parameter],
    buf: &mut [u8],
) -> Result<usize, BuildError> {
    let mut sink = SliceSink::new(buf);
    let mut w = LineWriter::new(&mut sink, config);
    w.write_line(header, body, identifier, params)?;
    Ok(w.written())
}

/// Send primitives bound to a transport, a configuration and the debug flag.
///
/// Obtained from [`Manager::sender`](crate::Manager::sender) or, inside a
/// handler, through its [`Context`](crate::Context). Sending never touches
/// parser state.
pub struct Sender<'a> {
    transport: &'a mut dyn Transport,
    config: &'a Config,
    debug: &'a mut bool,
}

impl<'a> Sender<'a> {
    pub(crate) fn new(
        transport: &'a mut dyn Transport,
        config: &'a Config,
        debug: &'a mut bool,
    ) -> Self {
        Self {
            transport,
            config,
            debug,
        }
    }

    /// Whether DEBUG lines are currently written.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        *self.debug
    }

    pub(crate) fn set_debug(&mut self, on: bool) {
        *self.debug = on;
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Sends `HEADER[:BODY][:k=v...][: (ID)]<terminator>`.
    ///
    /// Trailing line breaks in `body` are dropped so exactly one terminator is
    /// written, and `params` is clamped to the configured maximum count. An empty
    /// header sends nothing. Returns the number of bytes written.
    pub fn send_command(
        &mut self,
        header: &str,
        body: &str,
        identifier: &str,
        params: &[Parameter],
    ) -> usize {
        if header.is_empty() {
            return 0;
        }
        let mut sink = TransportSink::new(&mut *self.transport);
        let mut w = LineWriter::new(&mut sink, self.config);
        // A transport sink never fails.
        let _ = w.write_line(header, body, identifier, params);
        w.written()
    }

    /// Sends a typed line `TAG:BODY[: (ID)]`.
    ///
    /// Empty bodies are never sent, and `DEBUG` lines only go out in debug mode.
    pub fn send_typed(&mut self, tag: &str, body: &str, identifier: &str) -> usize {
        if body.is_empty() || (tag == DEBUG_TAG && !self.is_debug()) {
            return 0;
        }
        self.send_command(tag, body, identifier, &[])
    }

    pub fn send_debug(&mut self, body: &str, identifier: &str) -> usize {
        self.send_typed(DEBUG_TAG, body, identifier)
    }

    pub fn send_error(&mut self, body: &str, identifier: &str) -> usize {
        self.send_typed(ERROR_TAG, body, identifier)
    }
}
