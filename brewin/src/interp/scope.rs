//! Call stack of activation frames
//!
//! Each function call owns its own [`Environment`]. Lookups only ever see the
//! active frame: a callee has no access to its caller's locals beyond the
//! arguments bound to its parameters, and recursive calls do not clobber each
//! other's bindings.

use super::env::Environment;
use super::error::InterpResult;
use super::Value;

/// Stack of frames. The active frame is held separately from the suspended
/// ones so there is always exactly one frame to resolve names against.
#[derive(Debug, Default)]
pub struct CallStack {
    current: Environment,
    suspended: Vec<Environment>,
}

impl CallStack {
    /// Create a call stack holding a single empty base frame
    pub fn new() -> Self {
        CallStack {
            current: Environment::new(),
            suspended: Vec::new(),
        }
    }

    /// Make `frame` the active frame, suspending the current one.
    /// Returns the number of suspended frames after the push.
    pub fn push_frame(&mut self, frame: Environment) -> usize {
        let caller = std::mem::replace(&mut self.current, frame);
        self.suspended.push(caller);
        self.suspended.len()
    }

    /// Discard the active frame and resume the most recently suspended one.
    /// Returns the discarded frame, or `None` if only the base frame remains.
    pub fn pop_frame(&mut self) -> Option<Environment> {
        let caller = self.suspended.pop()?;
        Some(std::mem::replace(&mut self.current, caller))
    }

    /// Number of frames pushed on top of the base frame
    pub fn depth(&self) -> usize {
        self.suspended.len()
    }

    /// Declare a variable in the active frame
    pub fn declare(&mut self, name: &str, value: Value) -> InterpResult<()> {
        self.current.declare(name, value)
    }

    /// Look up a variable in the active frame
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.current.get(name)
    }

    /// Update a variable in the active frame
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        self.current.set(name, value)
    }

    /// The active frame (for debugging and tests)
    pub fn current(&self) -> &Environment {
        &self.current
    }

    /// Drop every frame and start over with an empty base frame
    pub fn reset(&mut self) {
        self.suspended.clear();
        self.current = Environment::new();
    }
}
