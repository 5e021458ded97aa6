use crate::lexer::{MAX_LINE_LENGTH, MAX_NAME_LENGTH};

/// What the session prints around each top-level form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    /// Numbered `[n]> ` prompt before each read (interactive input)
    Prompt,
    /// Numbered copy of the consumed source line after each read (file input)
    Transcript,
    /// Results only
    Silent,
}

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum bytes buffered per line load, terminator slot included
    pub max_line_length: usize,
    /// Names longer than this are truncated
    pub max_name_length: usize,
    /// Prompt / transcript behaviour
    pub echo: EchoMode,
    /// Report recoverable faults and keep reading instead of stopping
    pub recover_errors: bool,
    /// Print `Bye.` on shutdown
    pub farewell: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_line_length: MAX_LINE_LENGTH,
            max_name_length: MAX_NAME_LENGTH,
            echo: EchoMode::Prompt,
            recover_errors: false,
            farewell: true,
        }
    }
}

impl SessionConfig {
    /// Configuration for embedding: no prompts, no farewell
    pub fn silent() -> Self {
        SessionConfig {
            echo: EchoMode::Silent,
            farewell: false,
            ..Self::default()
        }
    }

    /// Sets the echo mode
    pub fn with_echo(mut self, echo: EchoMode) -> Self {
        self.echo = echo;
        self
    }

    /// Enables or disables per-line error recovery
    pub fn with_recovery(mut self, recover_errors: bool) -> Self {
        self.recover_errors = recover_errors;
        self
    }

    /// Sets the maximum line length
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Sets the maximum name length
    pub fn with_max_name_length(mut self, max_name_length: usize) -> Self {
        self.max_name_length = max_name_length;
        self
    }
}
