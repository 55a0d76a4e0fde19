//! Array access. Arrays are shared: `put` is visible through every reference.

use smallvec::smallvec;
use sps_ir::{Array, Builtin, Value};

use super::{expect_int, type_mismatch};
use crate::{EvalError, EvalResult, Interpreter};

fn expect_array(op: Builtin, value: &Value) -> EvalResult<Array> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        other => Err(type_mismatch(op, "array", other)),
    }
}

/// The array and an in-bounds index into it.
fn element(op: Builtin, array: &Value, index: &Value) -> EvalResult<(Array, usize)> {
    let items = expect_array(op, array)?;
    let index = expect_int(op, index)?;
    let len = items.borrow().len();
    match usize::try_from(index) {
        Ok(i) if i < len => Ok((items, i)),
        _ => Err(EvalError::RangeCheck {
            op: op.symbol(),
            index,
            len,
        }),
    }
}

pub(super) fn length(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<1>(
        Builtin::Length,
        |[array]| expect_array(Builtin::Length, array).map(drop),
        |_, [array]| {
            let len = expect_array(Builtin::Length, &array)?.borrow().len();
            Ok(smallvec![Value::Int(i64::try_from(len).unwrap_or(i64::MAX))])
        },
    )
}

/// `array index get` pushes `array[index]`.
pub(super) fn get(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<2>(
        Builtin::Get,
        |[array, index]| element(Builtin::Get, array, index).map(drop),
        |_, [array, index]| {
            let (items, i) = element(Builtin::Get, &array, &index)?;
            let value = items.borrow().get(i).cloned();
            Ok(value.into_iter().collect())
        },
    )
}

/// `array index value put` stores `value` in place and pushes the array back.
pub(super) fn put(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<3>(
        Builtin::Put,
        |[array, index, _]| element(Builtin::Put, array, index).map(drop),
        |_, [array, index, value]| {
            let (items, i) = element(Builtin::Put, &array, &index)?;
            if let Some(slot) = items.borrow_mut().get_mut(i) {
                *slot = value;
            }
            Ok(smallvec![array])
        },
    )
}
