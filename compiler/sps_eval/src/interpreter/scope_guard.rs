//! RAII scope frames for embedders.
//!
//! `begin` and `end` are not paired by the language. Host code that pushes a scope
//! frame uses [`ScopedInterpreter`] so the frame is removed on every exit path,
//! including early returns, aborted runs, and unwinding. While the guard lives, a
//! program's `end` cannot pop the guard's frame or anything beneath it.
//!
//! ```text
//! let frame = Dictionary::default();
//! interpreter.with_scope(frame, |scoped| {
//!     scoped.push(Value::Int(3));
//!     scoped.run("/n exch def n n mul")
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use sps_ir::Dictionary;

/// Guard that owns one dictionary-stack frame for its lifetime.
///
/// Derefs to the interpreter. The guard raises the dictionary stack's floor above its
/// own frame, so an unmatched `end` inside the scope reports `DictStackUnderflow`
/// instead of popping it. On drop the stack is cut back to the depth it had before the
/// frame was pushed and the previous floor returns; frames left by unmatched `begin`s
/// go with it.
pub struct ScopedInterpreter<'a> {
    interpreter: &'a mut Interpreter,
    base_depth: usize,
    outer_floor: usize,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        let dicts = &mut self.interpreter.dicts;
        dicts.truncate(self.base_depth);
        dicts.restore_floor(self.outer_floor);
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Interpreter {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Interpreter {
        self.interpreter
    }
}

impl Interpreter {
    /// Push `frame` onto the dictionary stack until the returned guard drops.
    pub fn scoped(&mut self, frame: Dictionary) -> ScopedInterpreter<'_> {
        let base_depth = self.dicts.depth();
        self.dicts.push(frame);
        let outer_floor = self.dicts.raise_floor();
        ScopedInterpreter {
            interpreter: self,
            base_depth,
            outer_floor,
        }
    }

    /// Run `f` with `frame` as the innermost scope, removing it afterwards.
    pub fn with_scope<T, F>(&mut self, frame: Dictionary, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped(frame);
        f(&mut scoped)
    }
}
