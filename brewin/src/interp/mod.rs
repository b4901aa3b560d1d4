//! Tree-walking interpreter
//!
//! - `value`: runtime values and their type tags
//! - `env` / `scope`: per-activation frames and the call stack holding them
//! - `functions`: user functions keyed by name and arity
//! - `io`: host output/input channels
//! - `eval`: the interpreter and expression evaluation
//! - `exec`: statement execution and control flow

mod env;
mod error;
mod eval;
mod exec;
mod functions;
mod io;
mod scope;
mod value;

pub use env::Environment;
pub use error::{ErrorKind, InterpResult, RuntimeError};
pub use eval::{eval_binary, eval_unary, Interpreter};
pub use exec::Flow;
pub use functions::{FnKey, FunctionTable};
pub use io::{BufferIo, ConsoleIo, HostIo};
pub use scope::CallStack;
pub use value::{Value, ValueType};

/// Default limit on nested function calls
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Interpreter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of nested calls before the run faults
    pub max_call_depth: usize,
}

impl InterpreterConfig {
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}
