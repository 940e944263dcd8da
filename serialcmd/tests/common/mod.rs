#![allow(dead_code)]

use std::collections::VecDeque;

use serialcmd::{Config, Context, Feed, ManualClock, Manager, Parser, Transport};

/// In-memory serial line: bytes pushed by the test are read by the manager,
/// everything the manager writes is collected.
#[derive(Debug, Default)]
pub struct MockSerial {
    input: VecDeque<u8>,
    output: Vec<u8>,
    writes: usize,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, s: &str) {
        self.input.extend(s.bytes());
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    pub fn pending(&self) -> usize {
        self.input.len()
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn take_output(&mut self) -> String {
        let out = self.output();
        self.output.clear();
        out
    }

    /// Number of `write_bytes` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Transport for MockSerial {
    fn available(&mut self) -> usize {
        self.input.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.writes += 1;
        self.output.extend_from_slice(bytes);
    }
}

pub fn manager(clock: &ManualClock) -> Manager<'_, MockSerial, &ManualClock> {
    manager_with(clock, Config::default())
}

pub fn manager_with(clock: &ManualClock, config: Config) -> Manager<'_, MockSerial, &ManualClock> {
    Manager::new(MockSerial::new(), clock, config).unwrap()
}

/// Fallback that reports the unmatched command back on the line.
pub fn echo_unknown(ctx: &mut Context<'_>) {
    let command = ctx.command();
    ctx.send_command("UNKNOWN", command, "", &[]);
}

/// Feeds every byte of `input` and returns the result of the last one.
pub fn feed(parser: &mut Parser, input: &[u8]) -> Feed {
    let mut last = Feed::Pending;
    for &b in input {
        last = parser.feed(b);
    }
    last
}

/// Feeds `input` and collects every non-pending result.
pub fn feed_all(parser: &mut Parser, input: &[u8]) -> Vec<Feed> {
    input
        .iter()
        .map(|&b| parser.feed(b))
        .filter(|f| *f != Feed::Pending)
        .collect()
}
