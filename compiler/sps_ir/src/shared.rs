//! Single-threaded shared mutable storage for arrays and dictionaries.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;

thread_local! {
    /// Handle pairs whose structural comparison is in progress on this thread.
    static COMPARING: RefCell<FxHashSet<(*const (), *const ())>> =
        RefCell::new(FxHashSet::default());

    /// Handles whose `Debug` output is in progress on this thread.
    static FORMATTING: RefCell<FxHashSet<*const ()>> = RefCell::new(FxHashSet::default());
}

/// Reference-counted interior mutability for values that are shared by reference.
///
/// Cloning a `Shared` clones the handle, not the contents: after
/// `/a [1 2 3] def a 0 9 put`, every slot that holds `a` sees `[9 2 3]`.
///
/// `Shared<T>` is not thread-safe. An interpreter session runs on one thread.
#[repr(transparent)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Address of the shared allocation, for identity checks.
    #[inline]
    pub fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Shared::new(T::default())
    }
}

/// Structural equality; identical handles compare equal without borrowing.
///
/// Containers may hold themselves. A pair met again while it is still being compared
/// is treated as equal: no difference was found along that cycle.
impl<T: PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let key = (self.as_ptr(), other.as_ptr());
        if !COMPARING.with(|pairs| pairs.borrow_mut().insert(key)) {
            return true;
        }
        let equal = *self.borrow() == *other.borrow();
        COMPARING.with(|pairs| pairs.borrow_mut().remove(&key));
        equal
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.as_ptr();
        if !FORMATTING.with(|open| open.borrow_mut().insert(key)) {
            return f.write_str("Shared(..)");
        }
        let result = f.debug_tuple("Shared").field(&*self.borrow()).finish();
        FORMATTING.with(|open| open.borrow_mut().remove(&key));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_allocation() {
        let a = Shared::new(vec![1, 2, 3]);
        let b = a.clone();
        b.borrow_mut()[0] = 9;
        assert_eq!(*a.borrow(), vec![9, 2, 3]);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn equality_is_structural() {
        let a = Shared::new(vec![1, 2]);
        let b = Shared::new(vec![1, 2]);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[derive(Debug, PartialEq)]
    enum Node {
        Leaf(i32),
        Link(Shared<Vec<Node>>),
    }

    fn self_containing(leaf: i32) -> Shared<Vec<Node>> {
        let cell = Shared::new(vec![Node::Leaf(leaf)]);
        cell.borrow_mut().push(Node::Link(cell.clone()));
        cell
    }

    #[test]
    fn self_containing_cells_compare_without_looping() {
        assert_eq!(self_containing(1), self_containing(1));
        assert_ne!(self_containing(1), self_containing(2));
    }

    #[test]
    fn self_containing_cells_debug_without_looping() {
        let rendered = format!("{:?}", self_containing(4));
        assert!(rendered.contains("Shared(..)"), "{rendered}");
    }

    #[test]
    fn default_is_empty() {
        let s: Shared<Vec<i32>> = Shared::default();
        assert!(s.borrow().is_empty());
    }
}
