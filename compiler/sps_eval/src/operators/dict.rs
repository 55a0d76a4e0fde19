//! Dictionaries and scope frames.

use smallvec::smallvec;
use sps_ir::{Builtin, Name, Value};

use super::{expect_numeric, type_mismatch, underflow, Results};
use crate::{EvalError, EvalResult, Interpreter};

/// Largest capacity hint honored when pre-sizing a dictionary.
const MAX_CAPACITY_HINT: usize = 1024;

/// `n dict` pushes a new empty dictionary; `n` is only a sizing hint.
pub(super) fn dict(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<1>(
        Builtin::Dict,
        |[hint]| expect_numeric(Builtin::Dict, hint),
        |_, [hint]| {
            let capacity = hint
                .as_int()
                .and_then(|n| usize::try_from(n).ok())
                .map_or(0, |n| n.min(MAX_CAPACITY_HINT));
            Ok(smallvec![Value::dict_with_capacity(capacity)])
        },
    )
}

/// Promote the dictionary on top of the operand stack to the innermost scope.
pub(super) fn begin(interp: &mut Interpreter) -> EvalResult {
    if matches!(interp.operands.top(), Some(Value::Dict(_))) {
        if let Some(Value::Dict(frame)) = interp.operands.pop() {
            interp.dicts.push(frame);
        }
        return Ok(());
    }
    if !interp.mode.checks_begin_operand() {
        return Ok(());
    }
    match interp.operands.top() {
        None => Err(underflow(Builtin::Begin, 1, 0)),
        Some(other) => Err(type_mismatch(Builtin::Begin, "dictionary", other)),
    }
}

/// Discard the innermost scope.
pub(super) fn end(interp: &mut Interpreter) -> EvalResult {
    match interp.dicts.pop() {
        Some(_) => Ok(()),
        None => Err(EvalError::DictStackUnderflow),
    }
}

fn expect_definable(name: &Value) -> EvalResult<Name> {
    let Value::Name(name) = name else {
        return Err(type_mismatch(Builtin::Def, "name", name));
    };
    if !name.is_definable() {
        return Err(EvalError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(name.clone())
}

/// `/name value def` binds in the innermost scope.
pub(super) fn def(interp: &mut Interpreter) -> EvalResult {
    interp.apply::<2>(
        Builtin::Def,
        |[name, _]| expect_definable(name).map(drop),
        |interp, [name, value]| {
            let name = expect_definable(&name)?;
            tracing::debug!(%name, %value, "define");
            interp.dicts.define(name, value)?;
            Ok(Results::new())
        },
    )
}
