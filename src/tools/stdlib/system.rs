//! Session builtins: variable assignment and termination

use super::arithmetic::parse_integer;
use crate::error::{Error, Result};
use crate::parser::Node;
use crate::runtime::Environment;
use crate::tools::{Tool, ToolRegistry};

/// Register system tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(QuitTool { name: "QUIT" });
    registry.register(QuitTool { name: "EXIT" });
    registry.register(SetTool);
}

/// QUIT / EXIT - ends the session successfully
pub struct QuitTool {
    name: &'static str,
}

impl Tool for QuitTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "Terminate the interpreter"
    }

    fn execute(&self, _args: Vec<Node>, _env: &mut Environment) -> Result<Node> {
        Err(Error::Quit)
    }
}

/// `(SET name value)` - stores an integer variable and returns the value
pub struct SetTool;

impl Tool for SetTool {
    fn name(&self) -> &str {
        "SET"
    }

    fn description(&self) -> &str {
        "Assign an integer to a variable"
    }

    fn execute(&self, args: Vec<Node>, env: &mut Environment) -> Result<Node> {
        let mut args = args.into_iter();

        let name = match args.next() {
            Some(node) => node,
            None => return Err(Error::syntax("Missing variable name")),
        };
        let value = match args.next() {
            Some(node) => node,
            None => return Err(Error::syntax("Missing variable value")),
        };

        let (name, text) = match (name, value) {
            (Node::Symbol(name) | Node::Value(name), Node::Value(text)) => (name, text),
            (_, Node::Value(_)) => return Err(Error::syntax("Invalid variable name")),
            _ => return Err(Error::syntax("Invalid value type")),
        };

        let number = parse_integer(&text)?;
        env.set(&name, number);
        Ok(Node::Value(text))
    }
}
