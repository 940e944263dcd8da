//! Inter-byte timeout tracking for partially received messages.

/// Remembers when the last byte arrived and whether the last message timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutMonitor {
    timeout_ms: u64,
    last_byte_ms: u64,
    timed_out: bool,
}

impl TimeoutMonitor {
    #[must_use]
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_byte_ms: 0,
            timed_out: false,
        }
    }

    /// A new message started: the previous abort no longer applies.
    pub fn message_started(&mut self) {
        self.timed_out = false;
    }

    /// A byte arrived at `now_ms`.
    pub fn touch(&mut self, now_ms: u64) {
        self.last_byte_ms = now_ms;
    }

    /// Whether more than the timeout has passed since the last byte.
    #[must_use]
    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms.wrapping_sub(self.last_byte_ms) > self.timeout_ms
    }

    /// Records that the in-progress message was abandoned.
    pub fn mark_timed_out(&mut self) {
        self.timed_out = true;
    }

    /// True from a timeout abort until the next message starts.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    #[must_use]
    pub fn last_byte_ms(&self) -> u64 {
        self.last_byte_ms
    }
}
