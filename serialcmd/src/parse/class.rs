use crate::config::Config;

/// How a single incoming byte is treated by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    Terminator,
    CommandSeparator,
    ParamSeparator,
    Content,
}

/// The three special bytes of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub terminator: u8,
    pub command_separator: u8,
    pub param_separator: u8,
}

impl Delimiters {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            terminator: config.terminator,
            command_separator: config.command_separator,
            param_separator: config.param_separator,
        }
    }

    /// Classify a byte. The terminator wins over the separators.
    #[must_use]
    pub fn classify(&self, byte: u8) -> ByteClass {
        if byte == self.terminator {
            ByteClass::Terminator
        } else if byte == self.command_separator {
            ByteClass::CommandSeparator
        } else if byte == self.param_separator {
            ByteClass::ParamSeparator
        } else {
            ByteClass::Content
        }
    }
}
