//! Runtime errors for the interpreter
//!
//! Every error is fatal: the language has no way to catch one, so an error
//! unwinds the whole run through `?` and is reported by the host.

use super::ValueType;
use crate::ast::{BinOp, UnOp};
use std::fmt;
use thiserror::Error;

/// Runtime error during interpretation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Kinds of runtime errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown or duplicated name: variable, function/arity, missing `main`
    Name,
    /// Operator or condition applied to values of the wrong type
    Type,
    /// Arithmetic fault, bad input, or a resource limit
    Fault,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Name => write!(f, "NAME_ERROR"),
            ErrorKind::Type => write!(f, "TYPE_ERROR"),
            ErrorKind::Fault => write!(f, "FAULT_ERROR"),
        }
    }
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_main() -> Self {
        Self::new(ErrorKind::Name, "No main() function was found")
    }

    pub fn undefined_variable(name: &str) -> Self {
        Self::new(
            ErrorKind::Name,
            format!("Variable {name} has not been defined"),
        )
    }

    pub fn redefined_variable(name: &str) -> Self {
        Self::new(
            ErrorKind::Name,
            format!("Variable {name} defined more than once"),
        )
    }

    pub fn undefined_function(name: &str, arity: usize) -> Self {
        Self::new(
            ErrorKind::Name,
            format!("Function {name} taking {arity} parameter(s) has not been defined"),
        )
    }

    pub fn duplicate_function(name: &str, arity: usize) -> Self {
        Self::new(
            ErrorKind::Type,
            format!("Function {name} taking {arity} parameter(s) defined more than once"),
        )
    }

    pub fn print_in_expression() -> Self {
        Self::new(
            ErrorKind::Name,
            "Unable to evaluate a print function call. Do you mean 'inputi()'?",
        )
    }

    pub fn not_an_expression(name: &str) -> Self {
        Self::new(
            ErrorKind::Name,
            format!("Function {name} cannot be called in an expression"),
        )
    }

    pub fn inputi_arity(got: usize) -> Self {
        Self::new(
            ErrorKind::Name,
            format!("No inputi() function found that takes {got} parameters"),
        )
    }

    pub fn binary_type_mismatch(op: BinOp, left: ValueType, right: ValueType) -> Self {
        Self::new(
            ErrorKind::Type,
            format!("Incompatible types for {op} operation: {left} and {right}"),
        )
    }

    pub fn unary_type_mismatch(op: UnOp, operand: ValueType) -> Self {
        Self::new(
            ErrorKind::Type,
            format!("Incompatible type for {op} operation: {operand}"),
        )
    }

    pub fn non_bool_condition(construct: &str, found: ValueType) -> Self {
        Self::new(
            ErrorKind::Type,
            format!("Condition of {construct} must be bool, found {found}"),
        )
    }

    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::Fault, "Division by zero")
    }

    pub fn overflow(op: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Fault, format!("Integer overflow in {op} operation"))
    }

    pub fn invalid_input(line: &str) -> Self {
        Self::new(
            ErrorKind::Fault,
            format!("Input {line:?} is not an integer"),
        )
    }

    pub fn end_of_input() -> Self {
        Self::new(ErrorKind::Fault, "No more input available")
    }

    pub fn stack_overflow(limit: usize) -> Self {
        Self::new(
            ErrorKind::Fault,
            format!("Stack overflow: call depth exceeded {limit}"),
        )
    }

    pub fn io_error(msg: &str) -> Self {
        Self::new(ErrorKind::Fault, format!("IO error: {msg}"))
    }
}

/// Result type for interpreter operations
pub type InterpResult<T> = Result<T, RuntimeError>;
