//! Host-side adapters for running the manager on a desktop OS.

use std::time::Instant;

use crate::transport::Clock;

/// Milliseconds since this clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(feature = "serialport")]
pub use self::serial::SerialTransport;

#[cfg(feature = "serialport")]
mod serial {
    use std::boxed::Box;
    use std::io::{Read, Write};
    use std::time::Duration;

    use serialport::SerialPort;
    use tracing::warn;

    use crate::transport::Transport;

    /// Read timeout used when a byte was reported available but has not arrived.
    const READ_TIMEOUT: Duration = Duration::from_millis(10);

    /// A serial port as a [`Transport`].
    ///
    /// I/O errors are logged and otherwise treated as "nothing available".
    pub struct SerialTransport {
        port: Box<dyn SerialPort>,
    }

    impl SerialTransport {
        /// Opens `path` at `baud_rate`, 8N1.
        pub fn open(path: &str, baud_rate: u32) -> Result<Self, serialport::Error> {
            let port = serialport::new(path, baud_rate)
                .timeout(READ_TIMEOUT)
                .open()?;
            Ok(Self { port })
        }

        #[must_use]
        pub fn from_port(port: Box<dyn SerialPort>) -> Self {
            Self { port }
        }

        pub fn port_mut(&mut self) -> &mut dyn SerialPort {
            self.port.as_mut()
        }
    }

    impl Transport for SerialTransport {
        fn available(&mut self) -> usize {
            match self.port.bytes_to_read() {
                Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
                Err(err) => {
                    warn!(%err, "serial port poll failed");
                    0
                }
            }
        }

        fn read_byte(&mut self) -> Option<u8> {
            let mut byte = [0u8; 1];
            match self.port.read(&mut byte) {
                Ok(1) => Some(byte[0]),
                Ok(_) => None,
                Err(err) => {
                    warn!(%err, "serial read failed");
                    None
                }
            }
        }

        fn write_bytes(&mut self, bytes: &[u8]) {
            if let Err(err) = self.port.write_all(bytes) {
                warn!(%err, "serial write failed");
            }
        }
    }
}
