//! Built-in operators and the operand harness they share.
//!
//! Every operator goes through [`Interpreter::apply`]:
//! 1. the stack must hold at least `N` operands, else `StackUnderflow`;
//! 2. `check` inspects the top `N` operands in place, in stack order (deepest first);
//! 3. only then are they popped and handed to `operation`, whose results are pushed
//!    in order.
//!
//! Every precondition, including domain checks such as division by zero or an index
//! out of range, lives in `check`. A fault therefore never consumes anything.

mod arith;
mod array;
mod control;
mod dict;
mod logic;
mod stack;

use smallvec::SmallVec;
use sps_ir::{Builtin, Value};

use crate::{EvalError, EvalResult, Interpreter};

/// Values an operator pushes back, in push order.
pub(crate) type Results = SmallVec<[Value; 2]>;

impl Interpreter {
    /// Invoke one built-in operator against the current stacks.
    ///
    /// A fault is returned as-is: it is neither recorded nor subject to the mode's
    /// fatal policy. Program execution goes through [`run`](Self::run) or
    /// [`execute`](Self::execute) for that.
    pub fn call(&mut self, op: Builtin) -> EvalResult {
        match op {
            Builtin::Add => arith::add(self),
            Builtin::Sub => arith::sub(self),
            Builtin::Mul => arith::mul(self),
            Builtin::Div => arith::div(self),
            Builtin::Mod => arith::modulo(self),
            Builtin::Neg => arith::neg(self),
            Builtin::Lt => arith::lt(self),
            Builtin::Gt => arith::gt(self),
            Builtin::Eq => arith::eq(self),
            Builtin::And => logic::and(self),
            Builtin::Or => logic::or(self),
            Builtin::Not => logic::not(self),
            Builtin::Put => array::put(self),
            Builtin::Length => array::length(self),
            Builtin::Get => array::get(self),
            Builtin::Dup => stack::dup(self),
            Builtin::Exch => stack::exch(self),
            Builtin::Pop => stack::pop(self),
            Builtin::Copy => stack::copy(self),
            Builtin::Clear => stack::clear(self),
            Builtin::Stack => stack::stack(self),
            Builtin::Print => stack::print(self),
            Builtin::Count => stack::count(self),
            Builtin::Dict => dict::dict(self),
            Builtin::Begin => dict::begin(self),
            Builtin::End => dict::end(self),
            Builtin::Def => dict::def(self),
            Builtin::If => control::if_(self),
            Builtin::IfElse => control::if_else(self),
            Builtin::For => control::for_(self),
            Builtin::ForAll => control::for_all(self),
        }
    }

    /// Check, pop, operate, push.
    pub(crate) fn apply<const N: usize>(
        &mut self,
        op: Builtin,
        check: impl FnOnce(&[Value; N]) -> EvalResult,
        operation: impl FnOnce(&mut Self, [Value; N]) -> EvalResult<Results>,
    ) -> EvalResult {
        let Some(operands) = self.operands.peek::<N>() else {
            return Err(underflow(op, N, self.operands.len()));
        };
        check(operands)?;
        let Some(operands) = self.operands.pop_array::<N>() else {
            return Err(underflow(op, N, self.operands.len()));
        };
        let results = operation(self, operands)?;
        self.operands.extend(results);
        Ok(())
    }
}

pub(crate) fn underflow(op: Builtin, needed: usize, found: usize) -> EvalError {
    EvalError::StackUnderflow {
        op: op.symbol(),
        needed,
        found,
    }
}

pub(crate) fn type_mismatch(op: Builtin, expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        op: op.symbol(),
        expected,
        found: found.type_name(),
    }
}

/// Operand predicate shared by operators that accept anything.
#[inline]
pub(crate) fn any<const N: usize>(_: &[Value; N]) -> EvalResult {
    Ok(())
}

pub(crate) fn expect_numeric(op: Builtin, value: &Value) -> EvalResult {
    if value.is_numeric() {
        Ok(())
    } else {
        Err(type_mismatch(op, "number", value))
    }
}

pub(crate) fn expect_int(op: Builtin, value: &Value) -> EvalResult<i64> {
    value
        .as_int()
        .ok_or_else(|| type_mismatch(op, "integer", value))
}

pub(crate) fn expect_bool(op: Builtin, value: &Value) -> EvalResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| type_mismatch(op, "boolean", value))
}

pub(crate) fn expect_proc(op: Builtin, value: &Value) -> EvalResult {
    match value {
        Value::Proc(_) => Ok(()),
        other => Err(type_mismatch(op, "procedure", other)),
    }
}
