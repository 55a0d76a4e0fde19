//! Stack manipulation and output.

use smallvec::smallvec;
use sps_ir::{Builtin, Value};

use super::{any, type_mismatch, underflow, Results};
use crate::{EvalError, EvalResult, Interpreter};

pub(super) fn dup(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<1>(Builtin::Dup, any, |_, [value]| {
        Ok(smallvec![value.clone(), value])
    })
}

pub(super) fn exch(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<2>(Builtin::Exch, any, |_, [a, b]| Ok(smallvec![b, a]))
}

pub(super) fn pop(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<1>(Builtin::Pop, any, |_, _| Ok(Results::new()))
}

/// `x1 .. xn n copy` pushes copies of `x1 .. xn`.
///
/// The count is validated against the stack below it before anything is consumed.
pub(super) fn copy(interp: &mut Interpreter) -> EvalResult {
    let found = interp.operands.len();
    let Some(top) = interp.operands.top() else {
        return Err(underflow(Builtin::Copy, 1, found));
    };
    let Value::Int(count) = *top else {
        return Err(type_mismatch(Builtin::Copy, "integer", top));
    };
    let below = found.saturating_sub(1);
    let n = usize::try_from(count).map_err(|_| EvalError::RangeCheck {
        op: Builtin::Copy.symbol(),
        index: count,
        len: found,
    })?;
    if n > below {
        return Err(underflow(Builtin::Copy, n.saturating_add(1), found));
    }
    interp.operands.pop();
    interp.operands.duplicate_top(n);
    Ok(())
}

pub(super) fn clear(interp: &mut Interpreter) -> EvalResult {
    interp.operands.clear();
    Ok(())
}

/// Print every operand, top first, without changing the stack.
pub(super) fn stack(interp: &mut Interpreter) -> EvalResult {
    for value in interp.operands.iter_top_first() {
        interp.print_handler.println(&value.to_string());
    }
    Ok(())
}

/// `=`: pop and print.
pub(super) fn print(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<1>(Builtin::Print, any, |interp, [value]| {
        interp.print_handler.println(&value.to_string());
        Ok(Results::new())
    })
}

/// Push the depth of the stack as it was before the push.
pub(super) fn count(interp: &mut Interpreter) -> EvalResult {
    let depth = i64::try_from(interp.operands.len()).unwrap_or(i64::MAX);
    interp.operands.push(Value::Int(depth));
    Ok(())
}
