//! Boolean operators. Operands must be booleans; numbers have no truth value here.

use smallvec::smallvec;
use sps_ir::{Builtin, Value};

use super::expect_bool;
use crate::{EvalResult, Interpreter};

fn binary(interp: &mut Interpreter, op: Builtin, combine: fn(bool, bool) -> bool) -> EvalResult {
    interp.apply::<2>(
        op,
        |[a, b]| {
            expect_bool(op, a)?;
            expect_bool(op, b).map(drop)
        },
        |_, [a, b]| {
            let result = combine(expect_bool(op, &a)?, expect_bool(op, &b)?);
            Ok(smallvec![Value::Bool(result)])
        },
    )
}

pub(super) fn and(interp: &mut Interpreter) -> EvalResult {
    binary(interp, Builtin::And, |a, b| a && b)
}

pub(super) fn or(interp: &mut Interpreter) -> EvalResult {
    binary(interp, Builtin::Or, |a, b| a || b)
}

pub(super) fn not(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<1>(
        Builtin::Not,
        |[value]| expect_bool(Builtin::Not, value).map(drop),
        |_, [value]| Ok(smallvec![Value::Bool(!expect_bool(Builtin::Not, &value)?)]),
    )
}
