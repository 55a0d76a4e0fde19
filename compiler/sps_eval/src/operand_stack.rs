//! The operand stack.

use sps_ir::Value;

/// LIFO sequence of values every operator reads from and writes to.
///
/// Slices handed out by this type are in stack order: deepest first, top last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperandStack {
    items: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<&Value> {
        self.items.last()
    }

    /// The top `N` values without consuming them.
    pub fn peek<const N: usize>(&self) -> Option<&[Value; N]> {
        let start = self.items.len().checked_sub(N)?;
        self.items[start..].try_into().ok()
    }

    /// Remove the top `N` values, or nothing if there are fewer than `N`.
    pub fn pop_array<const N: usize>(&mut self) -> Option<[Value; N]> {
        let start = self.items.len().checked_sub(N)?;
        self.items.split_off(start).try_into().ok()
    }

    /// Push copies of the top `n` values, keeping their order.
    ///
    /// Returns `false` and leaves the stack untouched when fewer than `n` values exist.
    pub fn duplicate_top(&mut self, n: usize) -> bool {
        let Some(start) = self.items.len().checked_sub(n) else {
            return false;
        };
        self.items.extend_from_within(start..);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Values from the top of the stack down.
    pub fn iter_top_first(&self) -> impl Iterator<Item = &Value> {
        self.items.iter().rev()
    }
}

impl Extend<Value> for OperandStack {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stack_of(values: &[i64]) -> OperandStack {
        let mut stack = OperandStack::new();
        stack.extend(values.iter().copied().map(Value::Int));
        stack
    }

    #[test]
    fn peek_is_in_stack_order() {
        let stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.peek::<2>(), Some(&[Value::Int(2), Value::Int(3)]));
        assert_eq!(stack.peek::<4>(), None);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn pop_array_takes_exactly_n() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.pop_array::<2>(), Some([Value::Int(2), Value::Int(3)]));
        assert_eq!(stack.as_slice(), &[Value::Int(1)]);
        assert_eq!(stack.pop_array::<2>(), None);
        assert_eq!(stack.as_slice(), &[Value::Int(1)]);
    }

    #[test]
    fn duplicate_top_keeps_order() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert!(stack.duplicate_top(2));
        assert_eq!(stack, stack_of(&[1, 2, 3, 2, 3]));
        assert!(!stack.duplicate_top(6));
        assert_eq!(stack.len(), 5);
        assert!(stack.duplicate_top(0));
        assert_eq!(stack.len(), 5);
    }

    #[test]
    fn iterates_top_first() {
        let stack = stack_of(&[1, 2, 3]);
        let order: Vec<&Value> = stack.iter_top_first().collect();
        assert_eq!(order, vec![&Value::Int(3), &Value::Int(2), &Value::Int(1)]);
    }
}
