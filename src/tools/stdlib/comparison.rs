//! Comparison builtins
//!
//! Results are boolean-encoded: `T` when every pairwise check holds, `NIL` otherwise.

use super::arithmetic::{reduce_arguments, Reducer};
use crate::error::Result;
use crate::parser::Node;
use crate::runtime::Environment;
use crate::tools::{Tool, ToolRegistry};

/// Register comparison tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(ComparisonTool::new("=", "Equal to the first argument", eq));
    registry.register(ComparisonTool::new(
        "/=",
        "Not equal to the first argument",
        neq,
    ));
    registry.register(ComparisonTool::new(">", "Strictly decreasing", gt));
    registry.register(ComparisonTool::new(">=", "Non-increasing", ge));
    registry.register(ComparisonTool::new("<", "Strictly increasing", lt));
    registry.register(ComparisonTool::new("<=", "Non-decreasing", le));
}

/// AND-reduces `check(first, arg)` over every argument after the first
fn against_first(values: &[i64], check: fn(i64, i64) -> bool) -> i64 {
    match values.split_first() {
        None => 1,
        Some((&first, rest)) => rest.iter().all(|&v| check(first, v)) as i64,
    }
}

/// AND-reduces `check(prev, next)` over neighbouring arguments
fn chained(values: &[i64], check: fn(i64, i64) -> bool) -> i64 {
    values.windows(2).all(|w| check(w[0], w[1])) as i64
}

fn eq(values: &[i64]) -> Result<i64> {
    Ok(against_first(values, |a, b| a == b))
}

fn neq(values: &[i64]) -> Result<i64> {
    Ok(against_first(values, |a, b| a != b))
}

fn gt(values: &[i64]) -> Result<i64> {
    Ok(chained(values, |a, b| a > b))
}

fn ge(values: &[i64]) -> Result<i64> {
    Ok(chained(values, |a, b| a >= b))
}

fn lt(values: &[i64]) -> Result<i64> {
    Ok(chained(values, |a, b| a < b))
}

fn le(values: &[i64]) -> Result<i64> {
    Ok(chained(values, |a, b| a <= b))
}

/// Boolean builtin backed by an integer reducer
pub struct ComparisonTool {
    name: &'static str,
    description: &'static str,
    reducer: Reducer,
}

impl ComparisonTool {
    fn new(name: &'static str, description: &'static str, reducer: Reducer) -> Self {
        ComparisonTool {
            name,
            description,
            reducer,
        }
    }
}

impl Tool for ComparisonTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn execute(&self, args: Vec<Node>, env: &mut Environment) -> Result<Node> {
        reduce_arguments(args, env, self.reducer).map(Node::boolean)
    }
}
