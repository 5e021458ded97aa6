//! Expression tree for Lispline
//!
//! A node owns its children outright: dropping the result of a top-level
//! form releases the whole tree it was built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text printed for the empty list and for false comparisons
pub const NIL_TEXT: &str = "NIL";

/// Text of the true value produced by comparison builtins
pub const TRUE_TEXT: &str = "T";

/// A node of the expression tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Empty list / false
    Nil,
    /// Numeric literal or computed result (including `T`)
    Value(String),
    /// Non-numeric atom
    Symbol(String),
    /// Form to evaluate, or a list produced by evaluation
    List(Vec<Node>),
    /// List whose evaluation is suppressed
    Quoted(Vec<Node>),
}

impl Node {
    /// Builds an atom from name text: digit-leading text is a value, anything else a symbol
    pub fn atom(text: impl Into<String>) -> Self {
        let text = text.into();
        if is_numeric_text(&text) {
            Node::Value(text)
        } else {
            Node::Symbol(text)
        }
    }

    /// Builds a value node holding an integer in decimal form
    pub fn integer(value: i64) -> Self {
        Node::Value(value.to_string())
    }

    /// Encodes a 0/1 comparison result: 0 is `NIL`, anything else `T`
    pub fn boolean(value: i64) -> Self {
        if value == 0 {
            Node::Nil
        } else {
            Node::Value(TRUE_TEXT.to_string())
        }
    }

    /// Text of an atom, `None` for lists and `NIL`
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Value(text) | Node::Symbol(text) => Some(text),
            _ => None,
        }
    }

    /// Marks this node and every nested list as quoted
    pub fn into_quoted(self) -> Node {
        match self {
            Node::List(items) | Node::Quoted(items) => {
                Node::Quoted(items.into_iter().map(Node::into_quoted).collect())
            }
            other => other,
        }
    }

    /// Name of the node kind, used in type errors
    pub fn type_name(&self) -> String {
        match self {
            Node::Nil => "nil",
            Node::Value(_) => "value",
            Node::Symbol(_) => "symbol",
            Node::List(_) => "list",
            Node::Quoted(_) => "quoted list",
        }
        .to_string()
    }

    /// Atom texts in reading order, descending into nested lists
    pub fn leaf_texts(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<String>) {
        match self {
            Node::Nil => leaves.push(NIL_TEXT.to_string()),
            Node::Value(text) | Node::Symbol(text) => leaves.push(text.clone()),
            Node::List(items) | Node::Quoted(items) => {
                for item in items {
                    item.collect_leaves(leaves);
                }
            }
        }
    }
}

/// Returns true when the text reads as a number literal (leading ASCII digit)
pub fn is_numeric_text(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Returns true when the text names a variable (leading letter)
pub fn is_variable_name(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Nil => write!(f, "{}", NIL_TEXT),
            Node::Value(text) | Node::Symbol(text) => write!(f, "{}", text),
            Node::List(items) | Node::Quoted(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
