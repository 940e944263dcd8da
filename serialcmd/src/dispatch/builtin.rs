//! Built-in `DEBUG` route.
//!
//! - `DEBUG` reports the current mode.
//! - `DEBUG:ON` / `DEBUG:OFF` (or `DEBUG:mode=on`) switch it.
//!
//! The reply is always `DEBUG:ON` or `DEBUG:OFF`.

use tracing::debug;

use crate::consts::DEBUG_COMMAND;
use crate::types::Parameter;

use super::Context;

pub(crate) fn matches(command: &str) -> bool {
    command == DEBUG_COMMAND
}

/// Reads an ON/OFF switch from the value, falling back to the key.
fn requested_mode(param: &Parameter) -> Option<bool> {
    [param.value.as_str(), param.key.as_str()]
        .into_iter()
        .map(str::trim)
        .find_map(|token| {
            if token.eq_ignore_ascii_case("ON") {
                Some(true)
            } else if token.eq_ignore_ascii_case("OFF") {
                Some(false)
            } else {
                None
            }
        })
}

pub(crate) fn handle(ctx: &mut Context<'_>) -> bool {
    if let [param] = ctx.params() {
        if let Some(on) = requested_mode(param) {
            debug!(on, "debug mode");
            ctx.set_debug(on);
        }
    }
    let state = if ctx.is_debug() { "ON" } else { "OFF" };
    ctx.send_command(DEBUG_COMMAND, state, "", &[]);
    true
}
