//! The interpreter session and its execution loop.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use sps_ir::{Builtin, Name, Value};
use sps_stack::ensure_sufficient_stack;

use crate::eval_mode::EvalMode;
use crate::{DictStack, EvalError, EvalResult, OperandStack, RunError, SharedPrintHandler};

/// One interpreter session.
///
/// Owns both stacks; nothing is global, so independent sessions never interfere.
/// State persists across [`run`](Self::run) calls until [`reset`](Self::reset).
pub struct Interpreter {
    pub(crate) operands: OperandStack,
    pub(crate) dicts: DictStack,
    pub(crate) mode: EvalMode,
    max_depth: usize,
    depth: usize,
    faults: Vec<EvalError>,
    pub(crate) print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// A session with default policy writing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Parse and execute `source`.
    ///
    /// A parse error runs nothing. A fatal fault stops execution; everything executed
    /// before it stays on the stacks. Recovered faults are collected in
    /// [`faults`](Self::faults).
    pub fn run(&mut self, source: &str) -> Result<(), RunError> {
        let program = sps_parse::parse(source)?;
        self.execute(&program).map_err(|err| {
            tracing::error!(%err, "run aborted");
            self.depth = 0;
            RunError::Aborted(err)
        })
    }

    /// Execute a parsed program or procedure body.
    ///
    /// Returns `Err` only for a fault the active mode treats as fatal.
    pub fn execute(&mut self, program: &[Value]) -> EvalResult {
        for item in program {
            tracing::trace!(%item, depth = self.depth, "execute");
            if let Err(err) = self.step(item) {
                self.report(err)?;
            }
        }
        Ok(())
    }

    fn step(&mut self, item: &Value) -> EvalResult {
        match item {
            Value::Operator(op) => {
                if op.is_control_flow() {
                    tracing::debug!(%op, depth = self.depth, "control flow");
                }
                self.call(*op)
            }
            Value::Call(name) => self.call_name(name),
            Value::Unknown(text) => Err(EvalError::InvalidInput {
                text: text.to_string(),
            }),
            literal => {
                self.operands.push(literal.clone());
                Ok(())
            }
        }
    }

    /// Resolve an executable name: bound procedures run, other bindings are pushed.
    fn call_name(&mut self, name: &Name) -> EvalResult {
        let value = self.lookup(name.as_str())?;
        if self.mode.skips_falsy_bindings() && value.is_falsy() {
            return Err(EvalError::FalsyBinding {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        match value {
            Value::Proc(body) => self.execute_nested(body.body()),
            data => {
                self.operands.push(data);
                Ok(())
            }
        }
    }

    /// Re-enter the execution loop for a procedure call or control-flow body.
    pub(crate) fn execute_nested(&mut self, body: &[Value]) -> EvalResult {
        if self.depth >= self.max_depth {
            return Err(EvalError::RecursionLimit {
                depth: self.max_depth,
            });
        }
        self.depth = self.depth.saturating_add(1);
        let _span = tracing::debug_span!("procedure", depth = self.depth).entered();
        tracing::debug!(len = body.len(), "enter procedure");
        let result = ensure_sufficient_stack(|| self.execute(body));
        self.depth = self.depth.saturating_sub(1);
        result
    }

    /// Record a recovered fault, or hand back one the active mode treats as fatal.
    fn report(&mut self, err: EvalError) -> EvalResult {
        if self.mode.is_fatal(&err) {
            return Err(err);
        }
        tracing::warn!(%err, "fault");
        self.faults.push(err);
        Ok(())
    }

    pub fn push(&mut self, value: Value) {
        self.operands.push(value);
    }

    /// Remove and return the top operand.
    pub fn pop(&mut self) -> EvalResult<Value> {
        self.operands.pop().ok_or(EvalError::StackUnderflow {
            op: Builtin::Pop.symbol(),
            needed: 1,
            found: 0,
        })
    }

    /// Operand stack contents, deepest first.
    pub fn operands(&self) -> &[Value] {
        self.operands.as_slice()
    }

    pub fn dicts(&self) -> &DictStack {
        &self.dicts
    }

    /// Bind a name literal (`/n`) in the innermost scope.
    pub fn define(&mut self, name: &str, value: Value) -> EvalResult {
        self.dicts.define(Name::new(name), value)
    }

    /// Resolve a bare name (`n`) through the scope chain.
    pub fn lookup(&self, bare: &str) -> EvalResult<Value> {
        self.dicts
            .lookup(bare)
            .ok_or_else(|| EvalError::NameNotFound {
                name: bare.to_owned(),
            })
    }

    /// Clear both stacks and the fault log. Policy and output sink are kept.
    pub fn reset(&mut self) {
        self.operands.clear();
        self.dicts.clear();
        self.faults.clear();
        self.depth = 0;
    }

    /// Faults recovered since the last [`take_faults`](Self::take_faults) or reset.
    pub fn faults(&self) -> &[EvalError] {
        &self.faults
    }

    pub fn take_faults(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.faults)
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
