//! Function table: user-defined functions keyed by name and arity

use super::error::{InterpResult, RuntimeError};
use crate::ast::FnDef;
use std::collections::HashMap;
use std::rc::Rc;

/// Lookup key of a function: two definitions sharing a name are distinct
/// only if their parameter counts differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FnKey {
    pub name: String,
    pub arity: usize,
}

impl FnKey {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FnKey {
            name: name.into(),
            arity,
        }
    }
}

/// Registered function definitions
#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: HashMap<FnKey, Rc<FnDef>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        FunctionTable {
            functions: HashMap::new(),
        }
    }

    /// Register a definition. Redefining the same name and arity is a type error.
    pub fn register(&mut self, fn_def: &FnDef) -> InterpResult<()> {
        let key = FnKey::new(fn_def.name.clone(), fn_def.arity());
        if self.functions.contains_key(&key) {
            return Err(RuntimeError::duplicate_function(&key.name, key.arity));
        }
        tracing::debug!(name = %key.name, arity = key.arity, "registered function");
        self.functions.insert(key, Rc::new(fn_def.clone()));
        Ok(())
    }

    /// Resolve a call by name and argument count
    pub fn resolve(&self, name: &str, arity: usize) -> Option<Rc<FnDef>> {
        self.functions.get(&FnKey::new(name, arity)).cloned()
    }

    /// Check whether any overload of `name` exists
    pub fn has_name(&self, name: &str) -> bool {
        self.functions.keys().any(|key| key.name == name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn clear(&mut self) {
        self.functions.clear();
    }
}
