//! Abstract Syntax Tree definitions
//!
//! The tree is produced by an external front end and handed over as-is;
//! the interpreter never mutates it.

mod expr;
mod stmt;

pub use expr::*;
pub use stmt::*;

use serde::{Deserialize, Serialize};

/// A program is a sequence of function definitions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub functions: Vec<FnDef>,
}

impl Program {
    pub fn new(functions: Vec<FnDef>) -> Self {
        Self { functions }
    }
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FnDef {
    pub name: String,
    pub params: Vec<String>,
    pub statements: Vec<Stmt>,
}

impl FnDef {
    pub fn new(name: impl Into<String>, params: &[&str], statements: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
            statements,
        }
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
