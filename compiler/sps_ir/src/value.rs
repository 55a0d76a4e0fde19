//! Runtime values.

use std::fmt;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Builtin, Name, Shared};

/// An ordered, mutable sequence shared by every slot that references it.
pub type Array = Shared<Vec<Value>>;

/// A mapping from name literal (marker included) to value, shared by reference.
pub type Dictionary = Shared<FxHashMap<Name, Value>>;

/// An unevaluated, executable sequence of program elements (`{ ... }`).
///
/// Procedures are immutable once parsed; cloning one is a reference-count bump.
#[derive(Clone, Debug, PartialEq)]
pub struct Procedure(Rc<[Value]>);

impl Procedure {
    pub fn new(body: Vec<Value>) -> Self {
        Procedure(Rc::from(body))
    }

    #[inline]
    pub fn body(&self) -> &[Value] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything a program element or operand-stack slot can hold.
///
/// The first seven variants are data and may sit on the operand stack. `Operator`,
/// `Call` and `Unknown` only appear inside parsed programs and procedure bodies:
/// the execution engine acts on them instead of pushing them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Bool(bool),
    /// A name literal such as `/square`, pushed verbatim and never resolved.
    Name(Name),
    Array(Array),
    Proc(Procedure),
    Dict(Dictionary),
    /// A built-in operator reference.
    Operator(Builtin),
    /// An executable name: looked up in the dictionary stack when executed.
    Call(Name),
    /// A symbol that is neither a literal, an operator, nor a well-formed name.
    Unknown(Name),
}

impl Value {
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Shared::new(items))
    }

    pub fn procedure(body: Vec<Value>) -> Self {
        Value::Proc(Procedure::new(body))
    }

    /// A fresh, empty dictionary with room for `capacity` bindings.
    pub fn dict_with_capacity(capacity: usize) -> Self {
        let map = FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        Value::Dict(Shared::new(map))
    }

    /// A name literal; the marker is part of `text`.
    pub fn name(text: &str) -> Self {
        Value::Name(Name::new(text))
    }

    /// Type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Real(_) => "real",
            Value::Bool(_) => "boolean",
            Value::Name(_) => "name",
            Value::Array(_) => "array",
            Value::Proc(_) => "procedure",
            Value::Dict(_) => "dictionary",
            Value::Operator(_) => "operator",
            Value::Call(_) => "executable name",
            Value::Unknown(_) => "unknown symbol",
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real(_))
    }

    /// Numeric value widened to a real.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer operands are widened the same way mixed arithmetic does"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether the value is zero, false, or an empty container.
    ///
    /// A binding holding such a value is indistinguishable from a missing one under
    /// the compatible lookup policy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Real(r) => *r == 0.0,
            Value::Bool(b) => !b,
            Value::Array(items) => items.borrow().is_empty(),
            Value::Proc(body) => body.is_empty(),
            Value::Dict(map) => map.borrow().is_empty(),
            Value::Name(_) | Value::Operator(_) | Value::Call(_) | Value::Unknown(_) => false,
        }
    }

    /// Whether every element of an array value is numeric.
    pub fn is_numeric_array(&self) -> bool {
        match self {
            Value::Array(items) => items.borrow().iter().all(Value::is_numeric),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Array handles currently being written, outermost first.
type OpenArrays = FxHashSet<*const ()>;

fn write_spaced(
    f: &mut fmt::Formatter<'_>,
    items: &[Value],
    open: &mut OpenArrays,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            f.write_str(" ")?;
        }
        write_value(f, item, open)?;
    }
    Ok(())
}

/// Reals always carry a fractional part and never use exponent notation, so the
/// output reads back as the same real.
fn write_real(f: &mut fmt::Formatter<'_>, r: f64) -> fmt::Result {
    write!(f, "{r}")?;
    if r.is_finite() && r.fract() == 0.0 {
        f.write_str(".0")?;
    }
    Ok(())
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, open: &mut OpenArrays) -> fmt::Result {
    match value {
        Value::Int(n) => write!(f, "{n}"),
        Value::Real(r) => write_real(f, *r),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Name(name) | Value::Call(name) | Value::Unknown(name) => write!(f, "{name}"),
        Value::Array(items) => {
            // An array stored inside itself renders its inner occurrence as `[...]`.
            let key = items.as_ptr();
            if !open.insert(key) {
                return f.write_str("[...]");
            }
            f.write_str("[")?;
            write_spaced(f, &items.borrow(), open)?;
            open.remove(&key);
            f.write_str("]")
        }
        Value::Proc(body) => {
            f.write_str("{")?;
            write_spaced(f, body.body(), open)?;
            f.write_str("}")
        }
        Value::Dict(_) => f.write_str("-dict-"),
        Value::Operator(op) => write!(f, "{op}"),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut OpenArrays::default())
    }
}

#[cfg(test)]
mod tests;
