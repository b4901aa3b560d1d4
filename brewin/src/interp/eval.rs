//! Expression evaluator

use super::error::{InterpResult, RuntimeError};
use super::exec::Flow;
use super::functions::FunctionTable;
use super::io::HostIo;
use super::scope::CallStack;
use super::value::Value;
use super::{Environment, InterpreterConfig};
use crate::ast::{BinOp, Expr, FnDef, Program, UnOp};

/// Stack growth parameters for deep recursion
const STACK_RED_ZONE: usize = 128 * 1024; // 128KB remaining triggers growth
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024; // Grow by 4MB each time

/// Built-in that reads an integer from the input channel
const INPUTI: &str = "inputi";
/// Built-in that writes a line to the output channel
const PRINT: &str = "print";

/// The interpreter
pub struct Interpreter {
    /// Activation frames
    pub(super) stack: CallStack,
    /// User-defined functions
    pub(super) functions: FunctionTable,
    /// Output and input channels
    pub(super) io: HostIo,
    pub(super) config: InterpreterConfig,
}

impl Interpreter {
    /// Create a new interpreter with default settings
    pub fn new(io: HostIo) -> Self {
        Self::with_config(io, InterpreterConfig::default())
    }

    pub fn with_config(io: HostIo, config: InterpreterConfig) -> Self {
        Interpreter {
            stack: CallStack::new(),
            functions: FunctionTable::new(),
            io,
            config,
        }
    }

    /// Register every function of a program
    pub fn load(&mut self, program: &Program) -> InterpResult<()> {
        for fn_def in &program.functions {
            self.functions.register(fn_def)?;
        }
        Ok(())
    }

    /// Run a program: register its functions, then execute `main()`.
    ///
    /// Returns the value `main` returned, or nil if it ran off its end.
    pub fn run(&mut self, program: &Program) -> InterpResult<Value> {
        self.functions.clear();
        self.stack.reset();
        self.load(program)?;

        let main_fn = self
            .functions
            .resolve("main", 0)
            .ok_or_else(RuntimeError::missing_main)?;
        tracing::debug!(functions = self.functions.len(), "starting main");
        self.invoke(&main_fn, Vec::new())
    }

    /// Call a loaded function by name with already-evaluated arguments
    pub fn call_function(&mut self, name: &str, args: Vec<Value>) -> InterpResult<Value> {
        let fn_def = self
            .functions
            .resolve(name, args.len())
            .ok_or_else(|| RuntimeError::undefined_function(name, args.len()))?;
        self.invoke(&fn_def, args)
    }

    /// Invoke a function with automatic stack growth
    pub(super) fn invoke(&mut self, fn_def: &FnDef, args: Vec<Value>) -> InterpResult<Value> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.invoke_inner(fn_def, args)
        })
    }

    #[tracing::instrument(level = "debug", skip_all, fields(function = %fn_def.name, arity = fn_def.arity()))]
    fn invoke_inner(&mut self, fn_def: &FnDef, args: Vec<Value>) -> InterpResult<Value> {
        if self.stack.depth() >= self.config.max_call_depth {
            return Err(RuntimeError::stack_overflow(self.config.max_call_depth));
        }

        // Bind parameters in a fresh frame
        let mut frame = Environment::new();
        for (param, arg) in fn_def.params.iter().zip(args) {
            frame.declare(param, arg)?;
        }

        self.stack.push_frame(frame);
        let result = self.execute_block(&fn_def.statements);
        self.stack.pop_frame();

        match result? {
            Flow::Return(value) => {
                tracing::debug!(%value, "returned");
                Ok(value)
            }
            Flow::Continue => Ok(Value::Nil),
        }
    }

    /// Evaluate an expression in the active frame, with automatic stack growth
    pub fn evaluate(&mut self, expr: &Expr) -> InterpResult<Value> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> InterpResult<Value> {
        match expr {
            Expr::IntLit(n) => Ok(Value::Int(*n)),
            Expr::StrLit(s) => Ok(Value::Str(s.clone())),
            Expr::BoolLit(b) => Ok(Value::Bool(*b)),
            Expr::Nil => Ok(Value::Nil),

            Expr::Var(name) => self
                .stack
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::undefined_variable(name)),

            Expr::Unary { op, expr } => {
                let operand = self.evaluate(expr)?;
                eval_unary(*op, operand)
            }

            // Both operands are always evaluated, left first; `&&` and `||`
            // do not short-circuit.
            Expr::Binary { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                eval_binary(*op, left, right)
            }

            Expr::Call { name, args } => match name.as_str() {
                INPUTI => self.eval_inputi(args),
                PRINT => Err(RuntimeError::print_in_expression()),
                _ if self.functions.has_name(name) => Err(RuntimeError::not_an_expression(name)),
                _ => Err(RuntimeError::undefined_function(name, args.len())),
            },
        }
    }

    /// `inputi()` / `inputi(prompt)`: emit the optional prompt, then read one
    /// line and parse it as an integer
    pub(super) fn eval_inputi(&mut self, args: &[Expr]) -> InterpResult<Value> {
        match args {
            [] => {}
            [prompt] => {
                let prompt = self.evaluate(prompt)?;
                self.io.output(&prompt.to_string())?;
            }
            _ => return Err(RuntimeError::inputi_arity(args.len())),
        }

        let line = self
            .io
            .get_input()?
            .ok_or_else(RuntimeError::end_of_input)?;
        line.trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| RuntimeError::invalid_input(&line))
    }

    /// Host channels
    pub fn io(&self) -> &HostIo {
        &self.io
    }

    /// Consume the interpreter, handing back its channels
    pub fn into_io(self) -> HostIo {
        self.io
    }

    /// Call stack (for debugging and tests)
    pub fn stack(&self) -> &CallStack {
        &self.stack
    }
}

/// Evaluate unary operation
pub fn eval_unary(op: UnOp, operand: Value) -> InterpResult<Value> {
    match (op, &operand) {
        (UnOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| RuntimeError::overflow(op)),
        (UnOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(RuntimeError::unary_type_mismatch(op, operand.value_type())),
    }
}

/// Evaluate binary operation
pub fn eval_binary(op: BinOp, left: Value, right: Value) -> InterpResult<Value> {
    let mismatch = |left: &Value, right: &Value| {
        RuntimeError::binary_type_mismatch(op, left.value_type(), right.value_type())
    };

    match op {
        // Arithmetic
        BinOp::Add => match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => checked_int(op, a.checked_add(*b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            _ => Err(mismatch(&left, &right)),
        },
        BinOp::Sub => match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => checked_int(op, a.checked_sub(*b)),
            _ => Err(mismatch(&left, &right)),
        },
        BinOp::Mul => match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => checked_int(op, a.checked_mul(*b)),
            _ => Err(mismatch(&left, &right)),
        },
        BinOp::Div => match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => floor_div(*a, *b).map(Value::Int),
            _ => Err(mismatch(&left, &right)),
        },

        // Equality never fails: values of different types are simply unequal
        BinOp::Eq => Ok(Value::Bool(left.lang_eq(&right))),
        BinOp::Ne => Ok(Value::Bool(!left.lang_eq(&right))),

        // Ordering is defined on integers only
        BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(match op {
                BinOp::Lt => a < b,
                BinOp::Le => a <= b,
                BinOp::Gt => a > b,
                _ => a >= b,
            })),
            _ => Err(mismatch(&left, &right)),
        },

        // Logical: any operand type is accepted and read through `truthy`
        BinOp::And => Ok(Value::Bool(left.truthy() && right.truthy())),
        BinOp::Or => Ok(Value::Bool(left.truthy() || right.truthy())),
    }
}

fn checked_int(op: BinOp, result: Option<i64>) -> InterpResult<Value> {
    result.map(Value::Int).ok_or_else(|| RuntimeError::overflow(op))
}

/// Integer division rounding toward negative infinity
fn floor_div(a: i64, b: i64) -> InterpResult<i64> {
    if b == 0 {
        return Err(RuntimeError::division_by_zero());
    }
    // Only i64::MIN / -1 overflows; it is rejected before `%` can panic on it.
    let q = a
        .checked_div(b)
        .ok_or_else(|| RuntimeError::overflow(BinOp::Div))?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}
