//! Command routing: the registry, the handler interface and the fallback.

mod context;
mod builtin;

use heapless::Vec;
use tracing::debug;

use crate::config::DispatchPolicy;
use crate::consts::{MAX_COMMAND_LEN, MAX_ROUTES};
use crate::error::RegisterError;
use crate::types::{CommandField, Parameter};

pub use self::context::Context;

/// A handler serving a fixed set of commands.
///
/// ```ignore
/// struct Led;
///
/// impl CommandHandler for Led {
///     fn supported_commands(&self) -> &[&str] {
///         &["LED", "BLINK"]
///     }
///
///     fn handle_command(&mut self, ctx: &mut Context<'_>, command: &str, params: &[Parameter]) -> bool {
///         ctx.send_ack_ok(command, params);
///         true
///     }
/// }
/// ```
pub trait CommandHandler {
    /// Commands this handler serves. Compared exactly, case-sensitive.
    fn supported_commands(&self) -> &[&str];

    fn supports_command(&self, command: &str) -> bool {
        !command.is_empty() && self.supported_commands().contains(&command)
    }

    /// Handles one message. Returns `false` to report it as not handled.
    fn handle_command(&mut self, ctx: &mut Context<'_>, command: &str, params: &[Parameter]) -> bool;
}

/// Closure route behavior. Whatever the closure captures is its context.
pub type CommandFn<'h> = dyn FnMut(&mut Context<'_>, &[Parameter]) -> bool + 'h;

/// Called when no route takes a message.
pub type Fallback = fn(&mut Context<'_>);

/// Pins a closure to the [`CommandFn`] signature so it can be registered.
///
/// ```ignore
/// let mut pong = command_fn(|ctx, _| ctx.send_command("PONG", "", "", &[]) > 0);
/// manager.register("PING", &mut pong)?;
/// ```
pub fn command_fn<F>(f: F) -> F
where
    F: FnMut(&mut Context<'_>, &[Parameter]) -> bool,
{
    f
}

/// Result of routing one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A route handled the message.
    Handled,
    /// At least one route matched but none handled it.
    Declined,
    /// No route matched.
    NoMatch,
}

enum Route<'h> {
    Debug,
    Handler(&'h mut dyn CommandHandler),
    Command {
        token: CommandField,
        behavior: &'h mut CommandFn<'h>,
    },
}

impl Route<'_> {
    fn matches(&self, command: &str) -> bool {
        if command.is_empty() {
            return false;
        }
        match self {
            Route::Debug => builtin::matches(command),
            Route::Handler(handler) => handler.supports_command(command),
            Route::Command { token, .. } => *token == command,
        }
    }

    fn invoke(&mut self, ctx: &mut Context<'_>, command: &str, params: &[Parameter]) -> bool {
        match self {
            Route::Debug => builtin::handle(ctx),
            Route::Handler(handler) => handler.handle_command(ctx, command, params),
            Route::Command { behavior, .. } => (**behavior)(ctx, params),
        }
    }
}

/// Ordered route table. The built-in `DEBUG` route always comes first.
pub struct Registry<'h> {
    routes: Vec<Route<'h>, MAX_ROUTES>,
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h> Registry<'h> {
    #[must_use]
    pub fn new() -> Self {
        let mut routes = Vec::new();
        // MAX_ROUTES is non-zero.
        let _ = routes.push(Route::Debug);
        Self { routes }
    }

    /// Routes `command` to `behavior`. Duplicates are appended; the first match wins.
    pub fn register(
        &mut self,
        command: &str,
        behavior: &'h mut CommandFn<'h>,
    ) -> Result<(), RegisterError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(RegisterError::EmptyCommand);
        }
        if command.len() > MAX_COMMAND_LEN {
            return Err(RegisterError::CommandTooLong);
        }
        let token = CommandField::truncated(command);
        self.push(Route::Command { token, behavior })?;
        debug!(command, "route registered");
        Ok(())
    }

    /// Routes every command `handler` supports to it.
    pub fn add_handler(&mut self, handler: &'h mut dyn CommandHandler) -> Result<(), RegisterError> {
        if handler.supported_commands().iter().all(|c| c.is_empty()) {
            return Err(RegisterError::NoCommands);
        }
        let commands = handler.supported_commands().len();
        self.push(Route::Handler(handler))?;
        debug!(commands, "handler registered");
        Ok(())
    }

    /// Removes the first closure route registered for `command`. Returns whether one was found.
    pub fn unregister(&mut self, command: &str) -> bool {
        let command = command.trim();
        let found = self
            .routes
            .iter()
            .position(|r| matches!(r, Route::Command { token, .. } if *token == command));
        match found {
            Some(index) => {
                self.routes.remove(index);
                debug!(command, "route removed");
                true
            }
            None => false,
        }
    }

    /// Whether any route would take `command`.
    #[must_use]
    pub fn supports(&self, command: &str) -> bool {
        self.routes.iter().any(|r| r.matches(command))
    }

    /// Number of routes, the built-in one included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false, since the built-in route cannot be removed. Kept to pair
    /// with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes the message in `ctx` according to `policy`.
    ///
    /// An empty command matches no route and yields [`Outcome::NoMatch`].
    pub fn dispatch(&mut self, policy: DispatchPolicy, ctx: &mut Context<'_>) -> Outcome {
        let message = ctx.message();
        let command = message.command();
        let mut matched = false;

        for route in &mut self.routes {
            if !route.matches(command) {
                continue;
            }
            matched = true;
            if route.invoke(ctx, command, message.params()) {
                return Outcome::Handled;
            }
            if policy == DispatchPolicy::FirstMatch {
                break;
            }
            debug!(command, "route declined, trying next");
        }

        if matched {
            Outcome::Declined
        } else {
            Outcome::NoMatch
        }
    }

    fn push(&mut self, route: Route<'h>) -> Result<(), RegisterError> {
        self.routes
            .push(route)
            .map_err(|_| RegisterError::RegistryFull)
    }
}
