/// Maximum number of key/value parameters captured per message.
pub const MAX_PARAMETERS: usize = 5;

/// Maximum byte length of a command token.
pub const MAX_COMMAND_LEN: usize = 16;

/// Maximum byte length of a parameter key.
pub const MAX_PARAM_KEY_LEN: usize = 10;

/// Maximum byte length of a parameter value.
pub const MAX_PARAM_VALUE_LEN: usize = 32;

/// Maximum byte length of a raw message, terminator included.
pub const MAX_MESSAGE_LEN: usize = 128;

/// Maximum number of registry routes, the built-in `DEBUG` route included.
pub const MAX_ROUTES: usize = 8;

/// Maximum byte length of an ACK `command=result` payload.
pub const ACK_PAYLOAD_LEN: usize = 64;

/// Default end-of-message byte.
pub const DEFAULT_TERMINATOR: u8 = b'\n';

/// Default byte between the command and its parameters, and between parameters.
pub const DEFAULT_COMMAND_SEPARATOR: u8 = b':';

/// Default byte between a parameter key and its value.
pub const DEFAULT_PARAM_SEPARATOR: u8 = b'=';

/// Default inter-byte timeout for a partially received message.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Reserved diagnostic command handled by the built-in route.
pub const DEBUG_COMMAND: &str = "DEBUG";

/// Type tag of debug lines.
pub const DEBUG_TAG: &str = "DEBUG";

/// Type tag of error lines.
pub const ERROR_TAG: &str = "ERR";

/// Header of acknowledgement lines.
pub const ACK_HEADER: &str = "ACK";

/// Identifier attached to errors raised by the manager itself.
pub const MANAGER_IDENTIFIER: &str = "CommandManager";

/// Identifier attached to the raw-message echo sent in debug mode.
pub const RAW_MESSAGE_IDENTIFIER: &str = "RawMessage";
