#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod consts;
pub mod error;
pub mod field;
pub mod timeout;
pub mod transport;
pub mod types;

pub mod build;
pub mod dispatch;
pub mod manager;
pub mod parse;

#[cfg(feature = "std")]
pub mod host;

pub use config::{Config, DispatchPolicy};
pub use error::{BuildError, ConfigError, ParseError, ParseErrorKind, RegisterError};
pub use field::Field;
pub use transport::{Clock, ManualClock, Transport};
pub use types::{Message, Parameter};

pub use build::{Sender, build_line};
pub use dispatch::{CommandFn, CommandHandler, Context, Fallback, Outcome, Registry, command_fn};
pub use manager::Manager;
pub use parse::{Feed, ParseState, Parser};

#[cfg(feature = "std")]
pub use host::SystemClock;
#[cfg(feature = "serialport")]
pub use host::SerialTransport;
