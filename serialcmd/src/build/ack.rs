//! Acknowledgement lines: `ACK:<command>=<result>[:k=v...]`.

use core::fmt::Write;

use crate::consts::{ACK_HEADER, ACK_PAYLOAD_LEN};
use crate::field::Field;
use crate::types::Parameter;

use super::Sender;

fn payload(command: &str, result: &str) -> Field<ACK_PAYLOAD_LEN> {
    let mut payload = Field::new();
    // Truncates past ACK_PAYLOAD_LEN.
    let _ = write!(payload, "{command}={result}");
    payload
}

impl Sender<'_> {
    /// Acknowledges `command` as successful: `ACK:<command>=ok`.
    pub fn send_ack_ok(&mut self, command: &str, params: &[Parameter]) -> usize {
        if command.is_empty() {
            return 0;
        }
        self.send_command(ACK_HEADER, &payload(command, "ok"), "", params)
    }

    /// Acknowledges `command` as failed: `ACK:<command>=<error>`, or `=error` when `error` is empty.
    pub fn send_ack_err(&mut self, command: &str, error: &str, params: &[Parameter]) -> usize {
        if command.is_empty() {
            return 0;
        }
        let error = if error.is_empty() { "error" } else { error };
        self.send_command(ACK_HEADER, &payload(command, error), "", params)
    }
}
