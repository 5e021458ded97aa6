//! # Lispline - a line-oriented LISP interpreter
//!
//! Lispline reads one parenthesized expression at a time from a file or an
//! interactive stream, evaluates it eagerly and prints the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispline::evaluate_source;
//!
//! # fn main() -> lispline::Result<()> {
//! let printed = evaluate_source("(SET X 10)\n(+ X 5)\n")?;
//! assert_eq!(printed, vec!["10", "15"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving a session
//!
//! ```rust
//! use lispline::{EchoMode, Session, SessionConfig};
//!
//! # fn main() -> lispline::Result<()> {
//! let config = SessionConfig::default().with_echo(EchoMode::Transcript);
//! let mut session = Session::new("(LIST 1 2 3)\n".as_bytes(), Vec::new(), config);
//! session.run(|err| eprintln!("{}", err))?;
//!
//! let out = String::from_utf8(session.into_output()).unwrap();
//! assert_eq!(out, "[1]> (LIST 1 2 3)\n(1 2 3)\nBye.\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - Names are case-insensitive (folded to upper case); integers are 64-bit.
//! - `NIL` is both the empty list and false; comparisons return `T` or `NIL`.
//! - A bare name at top level is a variable reference; unbound names print `NIL`.
//! - `'form` and `(QUOTE form)` suppress evaluation.
//!
//! ### Builtins
//!
//! - **Arithmetic**: `(+ 1 2 3)`, `(- 10 3)`, `(* 2 3)`, `(/ 10 2)`
//! - **Comparison**: `(= a b ...)`, `(/= a b ...)`, `(< a b ...)`, `(<= ...)`, `(> ...)`, `(>= ...)`
//! - **Lists**: `(QUOTE x)`, `(LIST a b ...)`, `(CAR list)`, `(CDR list)`
//! - **Session**: `(SET name value)`, `(QUIT)`, `(EXIT)`
//!
//! ## Architecture
//!
//! ```text
//! CharSource → SymbolScanner → Reader ⇄ LispEvaluator → Session prints result
//! ```
//!
//! Reading and evaluation are interleaved: every list is evaluated the moment
//! its closing parenthesis is read, and its result becomes an argument of the
//! enclosing list.

/// Version of the Lispline interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod tools;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{CharSource, SymbolScanner, Token};
pub use parser::{Node, ReadMode, Reader};
pub use runtime::{
    evaluate_source, EchoMode, Environment, LispEvaluator, Session, SessionConfig, Step,
};
pub use tools::{Tool, ToolRegistry};
