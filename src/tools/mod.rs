//! Builtin function system for Lispline
//!
//! Every builtin implements [`Tool`]; the [`ToolRegistry`] maps upper-case
//! names to them.

pub mod stdlib;

use crate::error::{Error, Result};
use crate::parser::Node;
use crate::runtime::Environment;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool trait - every builtin implements this
pub trait Tool: Send + Sync {
    /// Name the builtin is called by (upper case)
    fn name(&self) -> &str;

    /// Tool description
    fn description(&self) -> &str;

    /// Execute the builtin, consuming its already evaluated arguments
    fn execute(&self, args: Vec<Node>, env: &mut Environment) -> Result<Node>;
}

/// Tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create new registry with the standard builtins
    pub fn new() -> Self {
        let mut registry = ToolRegistry {
            tools: HashMap::new(),
        };

        stdlib::register_all(&mut registry);

        registry
    }

    /// Create empty registry (for testing)
    pub fn empty() -> Self {
        ToolRegistry {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get tool by name; names are matched exactly
    pub fn get(&self, name: &str) -> Result<Arc<dyn Tool>> {
        self.tools
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndefinedFunction {
                name: name.to_string(),
            })
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get tool count
    pub fn count(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
