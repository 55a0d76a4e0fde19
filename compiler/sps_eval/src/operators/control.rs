//! Control flow. Each operator re-enters the execution loop on a procedure operand
//! and communicates only through the shared stacks.

use sps_ir::{Builtin, Value};

use super::{expect_bool, expect_int, expect_proc, type_mismatch, Results};
use crate::{EvalError, EvalResult, Interpreter};

/// `cond {proc} if`
pub(super) fn if_(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<2>(
        Builtin::If,
        |[cond, body]| {
            expect_bool(Builtin::If, cond)?;
            expect_proc(Builtin::If, body)
        },
        |interp, [cond, body]| {
            if let (Value::Bool(true), Value::Proc(body)) = (cond, body) {
                interp.execute_nested(body.body())?;
            }
            Ok(Results::new())
        },
    )
}

/// `cond {then} {else} ifelse`
pub(super) fn if_else(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<3>(
        Builtin::IfElse,
        |[cond, then, otherwise]| {
            expect_bool(Builtin::IfElse, cond)?;
            expect_proc(Builtin::IfElse, then)?;
            expect_proc(Builtin::IfElse, otherwise)
        },
        |interp, [cond, then, otherwise]| {
            let branch = if cond.as_bool() == Some(true) {
                then
            } else {
                otherwise
            };
            if let Value::Proc(body) = branch {
                interp.execute_nested(body.body())?;
            }
            Ok(Results::new())
        },
    )
}

fn loop_bounds(operands: &[Value; 4]) -> EvalResult<(i64, i64, i64)> {
    let [init, step, limit, body] = operands;
    let init = expect_int(Builtin::For, init)?;
    let step = expect_int(Builtin::For, step)?;
    let limit = expect_int(Builtin::For, limit)?;
    expect_proc(Builtin::For, body)?;
    if step == 0 {
        return Err(EvalError::DegenerateLoopStep);
    }
    Ok((init, step, limit))
}

/// `init step limit {proc} for`
///
/// Runs from `init` to `limit` inclusive, in either direction, pushing the control
/// value before each pass.
pub(super) fn for_(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<4>(
        Builtin::For,
        |operands| loop_bounds(operands).map(drop),
        |interp, operands| {
            let (init, step, limit) = loop_bounds(&operands)?;
            let [.., Value::Proc(body)] = operands else {
                return Ok(Results::new());
            };
            let mut current = init;
            while (step > 0 && current <= limit) || (step < 0 && current >= limit) {
                interp.operands.push(Value::Int(current));
                interp.execute_nested(body.body())?;
                match current.checked_add(step) {
                    Some(next) => current = next,
                    None => break,
                }
            }
            Ok(Results::new())
        },
    )
}

/// `array {proc} forall` pushes each element and runs the procedure on it.
pub(super) fn for_all(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<2>(
        Builtin::ForAll,
        |[array, body]| {
            if !array.is_numeric_array() {
                return Err(type_mismatch(Builtin::ForAll, "numeric array", array));
            }
            expect_proc(Builtin::ForAll, body)
        },
        |interp, [array, body]| {
            let (Value::Array(items), Value::Proc(body)) = (array, body) else {
                return Ok(Results::new());
            };
            // The procedure may mutate the array; iterate over what it held at entry.
            let elements = items.borrow().clone();
            for element in elements {
                interp.operands.push(element);
                interp.execute_nested(body.body())?;
            }
            Ok(Results::new())
        },
    )
}
