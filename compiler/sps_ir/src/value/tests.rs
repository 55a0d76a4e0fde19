use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_scalars() {
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Real(4.0).to_string(), "4.0");
    assert_eq!(Value::Real(2.5).to_string(), "2.5");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::name("/n").to_string(), "/n");
}

#[test]
fn display_reals_positionally() {
    assert_eq!(Value::Real(1e20).to_string(), "100000000000000000000.0");
    assert_eq!(Value::Real(1.5e-7).to_string(), "0.00000015");
    assert_eq!(Value::Real(-0.0).to_string(), "-0.0");
    assert_eq!(Value::Real(-12.25).to_string(), "-12.25");
}

#[test]
fn display_self_containing_array() {
    let items = Shared::new(vec![Value::Int(1), Value::Int(2)]);
    let array = Value::Array(items.clone());
    items.borrow_mut()[0] = array.clone();
    assert_eq!(array.to_string(), "[[...] 2]");
}

#[test]
fn display_repeated_array_is_not_a_cycle() {
    let inner = Value::array(vec![Value::Int(7)]);
    let outer = Value::array(vec![inner.clone(), inner]);
    assert_eq!(outer.to_string(), "[[7] [7]]");
}

#[test]
fn self_containing_arrays_compare_structurally() {
    let cyclic = |first: i64| {
        let items = Shared::new(vec![Value::Int(first)]);
        let array = Value::Array(items.clone());
        items.borrow_mut().push(array.clone());
        array
    };
    assert_eq!(cyclic(1), cyclic(1));
    assert_ne!(cyclic(1), cyclic(2));
}

#[test]
fn display_containers() {
    let nested = Value::array(vec![
        Value::Int(1),
        Value::array(vec![Value::Int(2), Value::Real(3.5)]),
    ]);
    assert_eq!(nested.to_string(), "[1 [2 3.5]]");

    let square = Value::procedure(vec![
        Value::Operator(Builtin::Dup),
        Value::Operator(Builtin::Mul),
    ]);
    assert_eq!(square.to_string(), "{dup mul}");
    assert_eq!(Value::dict_with_capacity(4).to_string(), "-dict-");
}

#[test]
fn arrays_are_shared() {
    let original = Value::array(vec![Value::Int(1), Value::Int(2)]);
    let alias = original.clone();
    if let Value::Array(items) = &alias {
        items.borrow_mut()[1] = Value::Int(7);
    }
    assert_eq!(original.to_string(), "[1 7]");
}

#[test]
fn falsy_values() {
    assert!(Value::Int(0).is_falsy());
    assert!(Value::Real(0.0).is_falsy());
    assert!(Value::Bool(false).is_falsy());
    assert!(Value::array(Vec::new()).is_falsy());
    assert!(Value::dict_with_capacity(0).is_falsy());
    assert!(!Value::Int(5).is_falsy());
    assert!(!Value::name("/x").is_falsy());
    assert!(!Value::procedure(vec![Value::Int(1)]).is_falsy());
}

#[test]
fn numeric_helpers() {
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::Real(1.5).as_f64(), Some(1.5));
    assert_eq!(Value::Bool(true).as_f64(), None);
    assert!(Value::array(vec![Value::Int(1), Value::Real(2.0)]).is_numeric_array());
    assert!(!Value::array(vec![Value::Int(1), Value::Bool(true)]).is_numeric_array());
    assert!(!Value::Int(1).is_numeric_array());
}

#[test]
fn type_names() {
    assert_eq!(Value::Int(1).type_name(), "integer");
    assert_eq!(Value::procedure(Vec::new()).type_name(), "procedure");
    assert_eq!(Value::Call(Name::new("x")).type_name(), "executable name");
}
