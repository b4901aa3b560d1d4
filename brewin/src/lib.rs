//! Brewin evaluator library
//!
//! Tree-walking interpreter for Brewin, a small dynamically-typed imperative
//! language. Programs arrive as an already-built [`ast::Program`] (for
//! example decoded from JSON produced by an external front end).

pub mod ast;
pub mod error;
pub mod interp;

pub use error::{Error, Result};
pub use interp::{HostIo, Interpreter, InterpreterConfig, RuntimeError, Value};

/// Decode a program from its JSON encoding
pub fn load_program(json: &str) -> Result<ast::Program> {
    Ok(serde_json::from_str(json)?)
}

/// Run a program on the given channels with default settings, returning the
/// channels so captured output can be inspected
pub fn run_program(program: &ast::Program, io: HostIo) -> (Result<Value>, HostIo) {
    let mut interpreter = Interpreter::new(io);
    let result = interpreter.run(program).map_err(Error::from);
    (result, interpreter.into_io())
}
