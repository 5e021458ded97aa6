//! Error types for the Lispline interpreter

use thiserror::Error;

/// Interpreter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Read errors
    /// Syntax or semantic fault reported with the classic `Syntax error:` prefix
    ///
    /// **Triggered by:** unmatched parentheses, malformed `SET` calls
    /// **Example:** `(+ 1 2` followed by end of input
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Head of an evaluated list does not name a builtin
    ///
    /// **Example:** `(FOO 1)`
    #[error("Syntax error: Undefined function: {name}")]
    UndefinedFunction {
        /// Upper-cased function name
        name: String,
    },

    // Runtime errors
    /// Invalid arguments provided to a builtin
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments {
        /// Builtin name
        tool: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Type mismatch error
    ///
    /// **Example:** `(+ 1 (LIST 2 3))` (list where an integer is expected)
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected kind of node
        expected: String,
        /// Actual kind of node
        got: String,
    },

    /// Atom text that should be an integer but does not parse as one
    #[error("Invalid number: {text}")]
    InvalidNumber {
        /// Offending text
        text: String,
    },

    /// Division by zero error
    ///
    /// **Example:** `(/ 10 0)`
    #[error("Division by zero")]
    DivisionByZero,

    /// Integer result does not fit into 64 bits
    #[error("Arithmetic overflow in {op}")]
    Overflow {
        /// Operation name
        op: String,
    },

    // External errors
    /// Reading input or writing output failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message
        message: String,
    },

    // Control flow
    /// `QUIT`/`EXIT` was evaluated (not really an error, used for control flow)
    #[error("Quit requested")]
    Quit,
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that always ends the session
    Fatal,
    /// Error that an interactive session may report and skip
    Recoverable,
}

impl Error {
    /// Create a syntax error with a message
    pub fn syntax(msg: impl Into<String>) -> Self {
        Error::Syntax(msg.into())
    }

    /// Create an argument-count error for a builtin
    pub fn wrong_argument_count(tool: &str, expected: &str, got: usize) -> Self {
        Error::InvalidArguments {
            tool: tool.to_string(),
            reason: format!("wrong argument count: expected {}, got {}", expected, got),
        }
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::Io { .. } => ErrorSeverity::Fatal,
            Error::Quit => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Recoverable,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for Lispline operations
pub type Result<T> = std::result::Result<T, Error>;
