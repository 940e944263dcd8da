use crate::config::Config;
use crate::error::BuildError;
use crate::transport::Transport;
use crate::types::Parameter;

/// Destination of serialized bytes.
pub(crate) trait Sink {
    fn put(&mut self, bytes: &[u8]) -> Result<(), BuildError>;
}

/// A cursor-based writer into a caller-provided byte buffer.
pub(crate) struct SliceSink<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> SliceSink<'buf> {
    pub(crate) fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl Sink for SliceSink<'_> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), BuildError> {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(BuildError::BufferTooSmall);
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }
}

/// Streams straight into a transport. Never fails.
pub(crate) struct TransportSink<'t> {
    transport: &'t mut dyn Transport,
}

impl<'t> TransportSink<'t> {
    pub(crate) fn new(transport: &'t mut dyn Transport) -> Self {
        Self { transport }
    }
}

impl Sink for TransportSink<'_> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), BuildError> {
        self.transport.write_bytes(bytes);
        Ok(())
    }
}

/// Counts bytes on their way to the inner sink.
pub(crate) struct LineWriter<'s, S: Sink> {
    sink: &'s mut S,
    config: &'s Config,
    written: usize,
}

impl<'s, S: Sink> LineWriter<'s, S> {
    pub(crate) fn new(sink: &'s mut S, config: &'s Config) -> Self {
        Self {
            sink,
            config,
            written: 0,
        }
    }

    pub(crate) fn written(&self) -> usize {
        self.written
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BuildError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.sink.put(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), BuildError> {
        self.write_bytes(s.as_bytes())
    }

    fn write_byte(&mut self, b: u8) -> Result<(), BuildError> {
        self.write_bytes(&[b])
    }

    fn write_separator(&mut self) -> Result<(), BuildError> {
        self.write_byte(self.config.command_separator)
    }

    fn write_param(&mut self, param: &Parameter) -> Result<(), BuildError> {
        self.write_str(&param.key)?;
        self.write_byte(self.config.param_separator)?;
        self.write_str(&param.value)
    }

    /// Writes `HEADER[:BODY][:k=v...][: (ID)]<terminator>`.
    pub(crate) fn write_line(
        &mut self,
        header: &str,
        body: &str,
        identifier: &str,
        params: &[Parameter],
    ) -> Result<(), BuildError> {
        let body = strip_line_end(body, self.config);
        let params = &params[..params.len().min(self.config.max_param_count)];

        self.write_str(header)?;
        if !body.is_empty() || !params.is_empty() {
            self.write_separator()?;
        }
        self.write_str(body)?;
        if !body.is_empty() && !params.is_empty() {
            self.write_separator()?;
        }
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.write_separator()?;
            }
            self.write_param(param)?;
        }
        if !identifier.is_empty() {
            self.write_separator()?;
            self.write_str(" (")?;
            self.write_str(identifier)?;
            self.write_byte(b')')?;
        }
        self.write_byte(self.config.terminator)
    }
}

/// Drops trailing terminator and CR/LF bytes so exactly one terminator goes out.
fn strip_line_end<'a>(body: &'a str, config: &Config) -> &'a str {
    let bytes = body.as_bytes();
    let mut end = bytes.len();
    while end > 0 && config.is_line_end(bytes[end - 1]) {
        end -= 1;
    }
    body.get(..end).unwrap_or(body)
}
