//! Integer arithmetic builtins and the shared argument protocol
//!
//! Every numeric builtin first materializes its arguments into integers:
//! letter-leading atoms are read from the environment (0 when unbound),
//! other atoms are parsed as decimal integers and `NIL` counts as 0.
//! The integers are then folded by a reducer.

use crate::error::{Error, Result};
use crate::parser::{is_variable_name, Node};
use crate::runtime::Environment;
use crate::tools::{Tool, ToolRegistry};

/// Register arithmetic tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(AddTool);
    registry.register(SubTool);
    registry.register(MulTool);
    registry.register(DivTool);
}

/// Folds a materialized argument sequence into one integer
pub type Reducer = fn(&[i64]) -> Result<i64>;

/// Resolves a single argument to an integer
pub fn integer_value(node: &Node, env: &Environment) -> Result<i64> {
    match node {
        Node::Nil => Ok(0),
        Node::Value(text) | Node::Symbol(text) => {
            if is_variable_name(text) {
                Ok(env.get(text))
            } else {
                parse_integer(text)
            }
        }
        other => Err(Error::TypeError {
            expected: "integer".to_string(),
            got: other.type_name(),
        }),
    }
}

/// Parses signed decimal text
pub fn parse_integer(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|_| Error::InvalidNumber {
        text: text.to_string(),
    })
}

/// Materializes the arguments and folds them with `reducer`
///
/// The argument nodes are consumed.
pub fn reduce_arguments(args: Vec<Node>, env: &Environment, reducer: Reducer) -> Result<i64> {
    let values = args
        .iter()
        .map(|arg| integer_value(arg, env))
        .collect::<Result<Vec<i64>>>()?;
    drop(args);
    reducer(&values)
}

fn overflow(op: &str) -> Error {
    Error::Overflow { op: op.to_string() }
}

fn add(values: &[i64]) -> Result<i64> {
    values
        .iter()
        .try_fold(0i64, |acc, &v| acc.checked_add(v))
        .ok_or_else(|| overflow("+"))
}

fn sub(values: &[i64]) -> Result<i64> {
    match values.split_first() {
        None => Ok(0),
        Some((&first, rest)) => rest
            .iter()
            .try_fold(first, |acc, &v| acc.checked_sub(v))
            .ok_or_else(|| overflow("-")),
    }
}

fn mul(values: &[i64]) -> Result<i64> {
    values
        .iter()
        .try_fold(1i64, |acc, &v| acc.checked_mul(v))
        .ok_or_else(|| overflow("*"))
}

fn div(values: &[i64]) -> Result<i64> {
    let Some((&first, rest)) = values.split_first() else {
        return Ok(0);
    };
    let mut result = first;
    for &divisor in rest {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        result = result.checked_div(divisor).ok_or_else(|| overflow("/"))?;
    }
    Ok(result)
}

/// `(+ a b ...)` - sum of all arguments, 0 without arguments
pub struct AddTool;

impl Tool for AddTool {
    fn name(&self) -> &str {
        "+"
    }

    fn description(&self) -> &str {
        "Addition"
    }

    fn execute(&self, args: Vec<Node>, env: &mut Environment) -> Result<Node> {
        reduce_arguments(args, env, add).map(Node::integer)
    }
}

/// `(- a b ...)` - subtracts the rest from the first argument
///
/// A single argument is returned as is.
pub struct SubTool;

impl Tool for SubTool {
    fn name(&self) -> &str {
        "-"
    }

    fn description(&self) -> &str {
        "Subtraction"
    }

    fn execute(&self, args: Vec<Node>, env: &mut Environment) -> Result<Node> {
        reduce_arguments(args, env, sub).map(Node::integer)
    }
}

/// `(* a b ...)` - product of all arguments, 0 without arguments
pub struct MulTool;

impl Tool for MulTool {
    fn name(&self) -> &str {
        "*"
    }

    fn description(&self) -> &str {
        "Multiplication"
    }

    fn execute(&self, args: Vec<Node>, env: &mut Environment) -> Result<Node> {
        if args.is_empty() {
            return Ok(Node::integer(0));
        }
        reduce_arguments(args, env, mul).map(Node::integer)
    }
}

/// `(/ a b ...)` - integer division, left to right
pub struct DivTool;

impl Tool for DivTool {
    fn name(&self) -> &str {
        "/"
    }

    fn description(&self) -> &str {
        "Integer division"
    }

    fn execute(&self, args: Vec<Node>, env: &mut Environment) -> Result<Node> {
        reduce_arguments(args, env, div).map(Node::integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(texts: &[&str]) -> Vec<Node> {
        texts.iter().map(|t| Node::atom(*t)).collect()
    }

    fn run(tool: &dyn Tool, texts: &[&str]) -> Result<Node> {
        let mut env = Environment::new();
        tool.execute(atoms(texts), &mut env)
    }

    #[test]
    fn test_add() {
        assert_eq!(run(&AddTool, &["1", "2", "3"]).unwrap(), Node::integer(6));
        assert_eq!(run(&AddTool, &[]).unwrap(), Node::integer(0));
        assert_eq!(run(&AddTool, &["7"]).unwrap(), Node::integer(7));
    }

    #[test]
    fn test_sub() {
        assert_eq!(run(&SubTool, &["10", "3", "2"]).unwrap(), Node::integer(5));
        assert_eq!(run(&SubTool, &["4"]).unwrap(), Node::integer(4));
        assert_eq!(run(&SubTool, &[]).unwrap(), Node::integer(0));
        assert_eq!(run(&SubTool, &["-4", "1"]).unwrap(), Node::integer(-5));
    }

    #[test]
    fn test_mul() {
        assert_eq!(run(&MulTool, &["2", "3", "4"]).unwrap(), Node::integer(24));
        assert_eq!(run(&MulTool, &["9"]).unwrap(), Node::integer(9));
        assert_eq!(run(&MulTool, &[]).unwrap(), Node::integer(0));
    }

    #[test]
    fn test_div() {
        assert_eq!(run(&DivTool, &["100", "5", "2"]).unwrap(), Node::integer(10));
        assert_eq!(run(&DivTool, &["7", "2"]).unwrap(), Node::integer(3));
        assert_eq!(run(&DivTool, &["8"]).unwrap(), Node::integer(8));
        assert_eq!(run(&DivTool, &[]).unwrap(), Node::integer(0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(run(&DivTool, &["1", "0"]), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        let max = i64::MAX.to_string();
        assert_eq!(
            run(&AddTool, &[max.as_str(), "1"]),
            Err(Error::Overflow { op: "+".to_string() })
        );
    }

    #[test]
    fn test_variables_resolve_and_default_to_zero() {
        let mut env = Environment::new();
        env.set("X", 10);
        let result = AddTool.execute(atoms(&["X", "Y", "5"]), &mut env).unwrap();
        assert_eq!(result, Node::integer(15));
    }

    #[test]
    fn test_nil_counts_as_zero() {
        let mut env = Environment::new();
        let result = AddTool
            .execute(vec![Node::Nil, Node::atom("2")], &mut env)
            .unwrap();
        assert_eq!(result, Node::integer(2));
    }

    #[test]
    fn test_malformed_number() {
        assert_eq!(
            run(&AddTool, &["1", "+"]),
            Err(Error::InvalidNumber {
                text: "+".to_string()
            })
        );
    }

    #[test]
    fn test_list_argument_is_type_error() {
        let mut env = Environment::new();
        let err = AddTool
            .execute(vec![Node::List(atoms(&["1"]))], &mut env)
            .unwrap_err();
        assert!(matches!(err, Error::TypeError { .. }));
    }
}
