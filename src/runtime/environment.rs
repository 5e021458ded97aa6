/// Single variable slot; an empty name marks a free (tombstoned) slot
#[derive(Debug, Clone, PartialEq, Eq)]
struct Variable {
    /// Variable name, empty when the slot was unset
    name: String,
    /// Variable value
    value: i64,
}

/// Flat store of integer variables
///
/// Lookups are linear. Unsetting a variable only clears its name so the slot
/// can be reused by the next new binding; storage never shrinks.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Every slot ever created
    variables: Vec<Variable>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: Vec::new(),
        }
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|var| var.name == name)
    }

    /// Binds `name` to `value`, overwriting an existing binding
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(idx) = self.find(name) {
            self.variables[idx].value = value;
            tracing::debug!(name, value, "variable updated");
            return;
        }

        // Reuse a tombstoned slot before growing
        match self.find("") {
            Some(idx) => {
                let slot = &mut self.variables[idx];
                slot.name = name.to_string();
                slot.value = value;
            }
            None => self.variables.push(Variable {
                name: name.to_string(),
                value,
            }),
        }
        tracing::debug!(name, value, slots = self.variables.len(), "variable bound");
    }

    /// Checks if a variable with the given name exists
    pub fn has(&self, name: &str) -> bool {
        !name.is_empty() && self.find(name).is_some()
    }

    /// Returns the value of a variable, or 0 when it is not bound
    pub fn get(&self, name: &str) -> i64 {
        if name.is_empty() {
            return 0;
        }
        self.find(name)
            .map(|idx| self.variables[idx].value)
            .unwrap_or(0)
    }

    /// Removes a variable, leaving its slot free for reuse
    pub fn unset(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if let Some(idx) = self.find(name) {
            self.variables[idx].name.clear();
            tracing::debug!(name, "variable unset");
        }
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.variables
            .iter()
            .filter(|var| !var.name.is_empty())
            .count()
    }

    /// Returns true when no variable is bound
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots ever allocated, free ones included
    pub fn capacity(&self) -> usize {
        self.variables.len()
    }

    /// Drops every slot
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}
