use crate::error::{Error, Result};
use crate::parser::Node;
use crate::runtime::Environment;
use crate::tools::ToolRegistry;
use std::sync::Arc;

/// Evaluator for fully read forms
///
/// Holds the variable environment and the builtin registry. Nested forms are
/// evaluated by the reader as soon as they are complete, so the evaluator only
/// ever sees a head name followed by already evaluated arguments.
pub struct LispEvaluator {
    /// Variable environment
    pub env: Environment,
    /// Builtin registry
    registry: Arc<ToolRegistry>,
}

impl LispEvaluator {
    /// Creates a new evaluator with the standard builtins
    pub fn new() -> Self {
        LispEvaluator {
            env: Environment::new(),
            registry: Arc::new(ToolRegistry::new()),
        }
    }

    /// Creates a new evaluator with custom tool registry
    pub fn with_registry(registry: ToolRegistry) -> Self {
        LispEvaluator {
            env: Environment::new(),
            registry: Arc::new(registry),
        }
    }

    /// Evaluates one node, consuming it
    ///
    /// `NIL`, quoted lists and atoms come back unchanged. A list is a call:
    /// its head names a builtin and the remaining items are its arguments.
    pub fn evaluate(&mut self, node: Node) -> Result<Node> {
        let mut items = match node {
            Node::List(items) => items,
            other => return Ok(other),
        };

        if items.is_empty() {
            return Ok(Node::Nil);
        }

        let head = items.remove(0);
        let name = match head.text() {
            Some(text) => text.to_string(),
            None => {
                return Err(Error::UndefinedFunction {
                    name: head.to_string(),
                })
            }
        };

        let tool = self.registry.get(&name)?;
        tracing::debug!(function = %name, argc = items.len(), "calling builtin");
        tool.execute(items, &mut self.env)
    }
}

impl Default for LispEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(items: &[&str]) -> Node {
        Node::List(items.iter().map(|t| Node::atom(*t)).collect())
    }

    #[test]
    fn test_dispatches_builtin() {
        let mut evaluator = LispEvaluator::new();
        let result = evaluator.evaluate(call(&["+", "1", "2", "3"])).unwrap();
        assert_eq!(result, Node::integer(6));
    }

    #[test]
    fn test_nil_and_quoted_are_returned_unchanged() {
        let mut evaluator = LispEvaluator::new();
        assert_eq!(evaluator.evaluate(Node::Nil).unwrap(), Node::Nil);

        let quoted = Node::Quoted(vec![Node::atom("FOO"), Node::atom("1")]);
        assert_eq!(evaluator.evaluate(quoted.clone()).unwrap(), quoted);
    }

    #[test]
    fn test_undefined_function() {
        let mut evaluator = LispEvaluator::new();
        let err = evaluator.evaluate(call(&["FOO", "1"])).unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: Undefined function: FOO");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut evaluator = LispEvaluator::new();
        let err = evaluator.evaluate(call(&["car", "1"])).unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedFunction {
                name: "car".to_string()
            }
        );
    }

    #[test]
    fn test_set_writes_environment() {
        let mut evaluator = LispEvaluator::new();
        evaluator.evaluate(call(&["SET", "X", "5"])).unwrap();
        assert_eq!(evaluator.env.get("X"), 5);

        let result = evaluator.evaluate(call(&["*", "X", "X"])).unwrap();
        assert_eq!(result, Node::integer(25));
    }

    #[test]
    fn test_non_atom_head() {
        let mut evaluator = LispEvaluator::new();
        let form = Node::List(vec![Node::Nil, Node::atom("1")]);
        let err = evaluator.evaluate(form).unwrap_err();
        assert_eq!(err.to_string(), "Syntax error: Undefined function: NIL");
    }

    #[test]
    fn test_empty_registry() {
        let mut evaluator = LispEvaluator::with_registry(ToolRegistry::empty());
        assert!(evaluator.evaluate(call(&["+", "1"])).is_err());
    }
}
