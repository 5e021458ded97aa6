//! Lispline Parser Module
//!
//! Builds expression trees from tokens, evaluating each list as soon as its
//! closing parenthesis is read.

mod ast;
mod reader;

pub use ast::{is_numeric_text, is_variable_name, Node, NIL_TEXT, TRUE_TEXT};
pub use reader::{ReadMode, Reader};
