//! Arithmetic and numeric comparison.
//!
//! Binary operators compute `deeper OP top`: `10 4 sub` is `6`. Two integers stay
//! integral unless the result overflows, which promotes to a real. Any real operand
//! makes the result real. `div` is always real.

use std::cmp::Ordering;

use smallvec::smallvec;
use sps_ir::{Builtin, Value};

use super::{expect_numeric, Results};
use crate::{EvalError, EvalResult, Interpreter};

#[inline]
fn real(value: &Value) -> f64 {
    value.as_f64().unwrap_or_default()
}

fn both_numeric(op: Builtin, [a, b]: &[Value; 2]) -> EvalResult {
    expect_numeric(op, a)?;
    expect_numeric(op, b)
}

fn nonzero_divisor(op: Builtin, operands: &[Value; 2]) -> EvalResult {
    both_numeric(op, operands)?;
    if real(&operands[1]) == 0.0 {
        return Err(EvalError::UndefinedResult { op: op.symbol() });
    }
    Ok(())
}

fn binary(
    interp: &mut Interpreter,
    op: Builtin,
    int: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> EvalResult {
    interp.apply::<2>(
        op,
        |operands| both_numeric(op, operands),
        |_, [a, b]| {
            let result = match (&a, &b) {
                (Value::Int(x), Value::Int(y)) => int(*x, *y)
                    .map_or_else(|| Value::Real(float(real(&a), real(&b))), Value::Int),
                _ => Value::Real(float(real(&a), real(&b))),
            };
            Ok(smallvec![result])
        },
    )
}

pub(super) fn add(interp: &mut Interpreter) -> EvalResult {
    binary(interp, Builtin::Add, i64::checked_add, |a, b| a + b)
}

pub(super) fn sub(interp: &mut Interpreter) -> EvalResult {
    binary(interp, Builtin::Sub, i64::checked_sub, |a, b| a - b)
}

pub(super) fn mul(interp: &mut Interpreter) -> EvalResult {
    binary(interp, Builtin::Mul, i64::checked_mul, |a, b| a * b)
}

pub(super) fn div(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<2>(
        Builtin::Div,
        |operands| nonzero_divisor(Builtin::Div, operands),
        |_, [a, b]| Ok(smallvec![Value::Real(real(&a) / real(&b))]),
    )
}

/// Floored modulo: a nonzero result takes the sign of the divisor.
fn floored_int(a: i64, b: i64) -> Option<i64> {
    let rem = a.checked_rem(b)?;
    if rem != 0 && (rem < 0) != (b < 0) {
        rem.checked_add(b)
    } else {
        Some(rem)
    }
}

fn floored_real(a: f64, b: f64) -> f64 {
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem + b
    } else {
        rem
    }
}

pub(super) fn modulo(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<2>(
        Builtin::Mod,
        |operands| nonzero_divisor(Builtin::Mod, operands),
        |_, [a, b]| {
            let result = match (&a, &b) {
                (Value::Int(x), Value::Int(y)) => floored_int(*x, *y).map_or_else(
                    || Value::Real(floored_real(real(&a), real(&b))),
                    Value::Int,
                ),
                _ => Value::Real(floored_real(real(&a), real(&b))),
            };
            Ok(smallvec![result])
        },
    )
}

pub(super) fn neg(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<1>(
        Builtin::Neg,
        |[value]| expect_numeric(Builtin::Neg, value),
        |_, [value]| {
            let result = match &value {
                Value::Int(n) => n
                    .checked_neg()
                    .map_or_else(|| Value::Real(-real(&value)), Value::Int),
                other => Value::Real(-real(other)),
            };
            Ok(smallvec![result])
        },
    )
}

/// Integers compare exactly; anything involving a real compares as reals.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        _ => real(a).partial_cmp(&real(b)),
    }
}

fn comparison(
    interp: &mut Interpreter,
    op: Builtin,
    accept: fn(Ordering) -> bool,
) -> EvalResult {
    interp.apply::<2>(
        op,
        |operands| both_numeric(op, operands),
        |_, [a, b]| -> EvalResult<Results> {
            let holds = compare(&a, &b).is_some_and(accept);
            Ok(smallvec![Value::Bool(holds)])
        },
    )
}

pub(super) fn lt(interp: &mut Interpreter) -> EvalResult {
    comparison(interp, Builtin::Lt, Ordering::is_lt)
}

pub(super) fn gt(interp: &mut Interpreter) -> EvalResult {
    comparison(interp, Builtin::Gt, Ordering::is_gt)
}

pub(super) fn eq(interp: &mut Interpreter) -> EvalResult {
    comparison(interp, Builtin::Eq, Ordering::is_eq)
}
