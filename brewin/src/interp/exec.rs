//! Statement execution and control flow

use super::error::{InterpResult, RuntimeError};
use super::eval::Interpreter;
use super::value::Value;
use crate::ast::{Assign, Expr, Stmt};

/// Control signal produced by every statement.
///
/// Block and loop runners stop at the first `Return` and hand it upward
/// until the call boundary turns it into the call's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Carry on with the next statement
    Continue,
    /// Unwind to the enclosing call with this value
    Return(Value),
}

impl Interpreter {
    /// Execute statements in order until one returns
    pub fn execute_block(&mut self, stmts: &[Stmt]) -> InterpResult<Flow> {
        for stmt in stmts {
            if let Flow::Return(value) = self.execute(stmt)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Continue)
    }

    /// Execute a single statement in the active frame
    pub fn execute(&mut self, stmt: &Stmt) -> InterpResult<Flow> {
        tracing::trace!(kind = stmt.kind(), depth = self.stack.depth(), "execute");

        match stmt {
            Stmt::VarDef(name) => {
                self.stack.declare(name, Value::declared_default())?;
                Ok(Flow::Continue)
            }

            Stmt::Assign(assign) => {
                self.assign(assign)?;
                Ok(Flow::Continue)
            }

            Stmt::Call { name, args } => {
                self.exec_call(name, args)?;
                Ok(Flow::Continue)
            }

            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                if self.eval_condition(cond, "if")? {
                    self.execute_block(then_block)
                } else if let Some(else_block) = else_block {
                    self.execute_block(else_block)
                } else {
                    Ok(Flow::Continue)
                }
            }

            Stmt::For {
                init,
                cond,
                update,
                body,
            } => {
                self.assign(init)?;
                while self.eval_condition(cond, "for")? {
                    if let Flow::Return(value) = self.execute_block(body)? {
                        return Ok(Flow::Return(value));
                    }
                    self.assign(update)?;
                }
                Ok(Flow::Continue)
            }

            Stmt::Return(expr) => {
                let value = match expr {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            }
        }
    }

    /// Store into an already-declared variable; the new value may have a
    /// different type than the old one
    fn assign(&mut self, assign: &Assign) -> InterpResult<()> {
        if self.stack.get(&assign.name).is_none() {
            return Err(RuntimeError::undefined_variable(&assign.name));
        }
        let value = self.evaluate(&assign.expr)?;
        self.stack.set(&assign.name, value);
        Ok(())
    }

    /// Conditions must be booleans; `truthy` is reserved for `&&` and `||`
    fn eval_condition(&mut self, cond: &Expr, construct: &str) -> InterpResult<bool> {
        let value = self.evaluate(cond)?;
        value
            .as_bool()
            .ok_or_else(|| RuntimeError::non_bool_condition(construct, value.value_type()))
    }

    /// Function call in statement position; any return value is discarded
    fn exec_call(&mut self, name: &str, args: &[Expr]) -> InterpResult<()> {
        match name {
            "print" => self.exec_print(args),
            "inputi" => self.eval_inputi(args).map(|_| ()),
            _ => {
                let fn_def = self
                    .functions
                    .resolve(name, args.len())
                    .ok_or_else(|| RuntimeError::undefined_function(name, args.len()))?;
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<InterpResult<Vec<_>>>()?;
                self.invoke(&fn_def, values)?;
                Ok(())
            }
        }
    }

    /// Concatenate the textual form of every argument into one output line
    fn exec_print(&mut self, args: &[Expr]) -> InterpResult<()> {
        let mut line = String::new();
        for arg in args {
            let value = self.evaluate(arg)?;
            line.push_str(&value.to_string());
        }
        self.io.output(&line)
    }
}
