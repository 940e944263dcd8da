use core::cell::Cell;

/// A bidirectional byte stream, e.g. a UART.
///
/// Implementations must not block: `available` reports what can be read right
/// now and `read_byte` returns `None` when nothing is pending.
pub trait Transport {
    /// Number of bytes that can be read without waiting.
    fn available(&mut self) -> usize;

    /// Reads the next pending byte.
    fn read_byte(&mut self) -> Option<u8>;

    /// Writes `bytes`. Failures are the transport's to report; the caller does not retry.
    fn write_bytes(&mut self, bytes: &[u8]);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn available(&mut self) -> usize {
        (**self).available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        (**self).read_byte()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. May wrap.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// A clock that only moves when told to. Share it by reference with the manager.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    #[must_use]
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
