//! Lexical analysis for Lispline
//!
//! Reads the input one line at a time and classifies characters into tokens
//! on demand.

mod scanner;
mod source;
mod token;

pub use scanner::{SymbolScanner, MAX_NAME_LENGTH};
pub use source::{CharSource, MAX_LINE_LENGTH};
pub use token::Token;
