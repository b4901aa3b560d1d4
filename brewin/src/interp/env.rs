//! Environment for variable bindings
//!
//! One environment is one flat frame: everything a function activation
//! declares, including declarations inside nested `if`/`for` blocks, lands in
//! the same table.

use super::error::{InterpResult, RuntimeError};
use super::Value;
use std::collections::HashMap;

/// Environment holding the bindings of a single function activation
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Declare a new variable. A name may be declared once per environment.
    pub fn declare(&mut self, name: &str, value: Value) -> InterpResult<()> {
        if self.bindings.contains_key(name) {
            return Err(RuntimeError::redefined_variable(name));
        }
        self.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Look up a variable
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Update an existing variable, returning false if it was never declared
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Check if a variable is declared
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get all bindings (for debugging)
    pub fn bindings(&self) -> &HashMap<String, Value> {
        &self.bindings
    }
}
