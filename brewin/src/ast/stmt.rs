//! Statement AST nodes

use super::Expr;
use serde::{Deserialize, Serialize};

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Variable declaration: `var name;`
    VarDef(String),

    /// Assignment: `name = expr;`
    Assign(Assign),

    /// Function call statement: `name(args...);`
    Call { name: String, args: Vec<Expr> },

    /// Conditional with optional else block
    If {
        cond: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
    },

    /// Three-part loop: `for (init; cond; update) { body }`
    For {
        init: Assign,
        cond: Expr,
        update: Assign,
        body: Vec<Stmt>,
    },

    /// Return with optional value: `return;` / `return expr;`
    Return(Option<Expr>),
}

/// Assignment target and source, shared by assignment statements and the
/// initializer/update clauses of `for`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub name: String,
    pub expr: Expr,
}

impl Assign {
    pub fn new(name: impl Into<String>, expr: Expr) -> Self {
        Self {
            name: name.into(),
            expr,
        }
    }
}

impl Stmt {
    pub fn var_def(name: impl Into<String>) -> Self {
        Stmt::VarDef(name.into())
    }

    pub fn assign(name: impl Into<String>, expr: Expr) -> Self {
        Stmt::Assign(Assign::new(name, expr))
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Stmt::Call {
            name: name.into(),
            args,
        }
    }

    /// `print(args...)`
    pub fn print(args: Vec<Expr>) -> Self {
        Stmt::call("print", args)
    }

    pub fn if_then(cond: Expr, then_block: Vec<Stmt>) -> Self {
        Stmt::If {
            cond,
            then_block,
            else_block: None,
        }
    }

    pub fn if_else(cond: Expr, then_block: Vec<Stmt>, else_block: Vec<Stmt>) -> Self {
        Stmt::If {
            cond,
            then_block,
            else_block: Some(else_block),
        }
    }

    pub fn for_loop(init: Assign, cond: Expr, update: Assign, body: Vec<Stmt>) -> Self {
        Stmt::For {
            init,
            cond,
            update,
            body,
        }
    }

    pub fn ret(expr: Option<Expr>) -> Self {
        Stmt::Return(expr)
    }

    /// Short name of the statement kind, used in trace output
    pub fn kind(&self) -> &'static str {
        match self {
            Stmt::VarDef(_) => "vardef",
            Stmt::Assign(_) => "assign",
            Stmt::Call { .. } => "fcall",
            Stmt::If { .. } => "if",
            Stmt::For { .. } => "for",
            Stmt::Return(_) => "return",
        }
    }
}
