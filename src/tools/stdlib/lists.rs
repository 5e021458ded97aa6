//! List builtins: QUOTE, LIST, CAR, CDR

use crate::error::{Error, Result};
use crate::parser::Node;
use crate::runtime::Environment;
use crate::tools::{Tool, ToolRegistry};

/// Register list tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(QuoteTool);
    registry.register(ListTool);
    registry.register(CarTool);
    registry.register(CdrTool);
}

/// Sequence a list primitive operates on
///
/// A lone list argument contributes its items; otherwise the arguments
/// themselves form the sequence, so `(CAR 1 2 3)` and `(CAR '(1 2 3))` agree.
fn sequence(mut args: Vec<Node>) -> Vec<Node> {
    if args.len() == 1 {
        match args.pop() {
            Some(Node::List(items)) | Some(Node::Quoted(items)) => return items,
            Some(other) => args.push(other),
            None => {}
        }
    }
    args
}

/// `(QUOTE x)` - returns its argument unevaluated
pub struct QuoteTool;

impl Tool for QuoteTool {
    fn name(&self) -> &str {
        "QUOTE"
    }

    fn description(&self) -> &str {
        "Suppress evaluation"
    }

    fn execute(&self, mut args: Vec<Node>, _env: &mut Environment) -> Result<Node> {
        match args.len() {
            0 => Ok(Node::Nil),
            1 => Ok(args.remove(0).into_quoted()),
            _ => Ok(Node::List(args).into_quoted()),
        }
    }
}

/// `(LIST a b ...)` - list of the arguments
pub struct ListTool;

impl Tool for ListTool {
    fn name(&self) -> &str {
        "LIST"
    }

    fn description(&self) -> &str {
        "Build a list"
    }

    fn execute(&self, args: Vec<Node>, _env: &mut Environment) -> Result<Node> {
        if args.is_empty() {
            return Ok(Node::Nil);
        }
        Ok(Node::List(args))
    }
}

/// `(CAR list)` - first element
pub struct CarTool;

impl Tool for CarTool {
    fn name(&self) -> &str {
        "CAR"
    }

    fn description(&self) -> &str {
        "First element of a list"
    }

    fn execute(&self, args: Vec<Node>, _env: &mut Environment) -> Result<Node> {
        let mut items = sequence(args).into_iter();
        match items.next() {
            None => Err(Error::wrong_argument_count("CAR", "at least 1", 0)),
            Some(Node::Symbol(text)) => Ok(Node::Value(text)),
            Some(first) => Ok(first),
        }
    }
}

/// `(CDR list)` - everything after the first element
pub struct CdrTool;

impl Tool for CdrTool {
    fn name(&self) -> &str {
        "CDR"
    }

    fn description(&self) -> &str {
        "All elements of a list but the first"
    }

    fn execute(&self, args: Vec<Node>, _env: &mut Environment) -> Result<Node> {
        let mut items = sequence(args);
        if items.len() < 2 {
            return Err(Error::wrong_argument_count("CDR", "at least 2", items.len()));
        }
        items.remove(0);
        Ok(Node::List(items))
    }
}
