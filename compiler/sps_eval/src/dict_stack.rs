//! The dictionary stack: scope frames for name bindings.

use sps_ir::{Dictionary, Name, Value};

use crate::{EvalError, EvalResult};

/// Frames of name bindings, innermost last.
///
/// Frames are shared [`Dictionary`] handles: a dictionary promoted by `begin` is the
/// same object any operand-stack slot still refers to.
///
/// Frames at or below the floor belong to the host and cannot be popped by a program.
#[derive(Clone, Debug, Default)]
pub struct DictStack {
    frames: Vec<Dictionary>,
    floor: usize,
}

impl DictStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn push(&mut self, frame: Dictionary) {
        self.frames.push(frame);
    }

    /// Remove the innermost frame, unless it sits at or below the floor.
    pub fn pop(&mut self) -> Option<Dictionary> {
        if self.frames.len() <= self.floor {
            return None;
        }
        self.frames.pop()
    }

    /// Number of frames [`pop`](Self::pop) will not remove.
    #[inline]
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Protect every current frame from `pop`; returns the previous floor.
    pub(crate) fn raise_floor(&mut self) -> usize {
        std::mem::replace(&mut self.floor, self.frames.len())
    }

    pub(crate) fn restore_floor(&mut self, floor: usize) {
        self.floor = floor;
    }

    /// Drop frames until at most `depth` remain, floor or not.
    pub(crate) fn truncate(&mut self, depth: usize) {
        self.frames.truncate(depth);
    }

    pub fn top(&self) -> Option<&Dictionary> {
        self.frames.last()
    }

    /// Bind `name` (marker included) in the innermost frame, creating a frame if
    /// there is none. Outer frames are never written.
    pub fn define(&mut self, name: Name, value: Value) -> EvalResult {
        if !name.is_definable() {
            return Err(EvalError::InvalidName {
                name: name.to_string(),
            });
        }
        if self.frames.is_empty() {
            self.frames.push(Dictionary::default());
        }
        if let Some(frame) = self.frames.last() {
            frame.borrow_mut().insert(name, value);
        }
        Ok(())
    }

    /// Resolve a bare name (no marker), innermost frame first.
    pub fn lookup(&self, bare: &str) -> Option<Value> {
        let key = Name::literal(bare);
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.borrow().get(&key).cloned())
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn define_creates_the_first_frame() {
        let mut dicts = DictStack::new();
        assert!(dicts.is_empty());
        assert_eq!(dicts.define(Name::new("/n"), Value::Int(2)), Ok(()));
        assert_eq!(dicts.depth(), 1);
        assert_eq!(dicts.lookup("n"), Some(Value::Int(2)));
    }

    #[test]
    fn inner_frames_shadow_and_unshadow() {
        let mut dicts = DictStack::new();
        assert_eq!(dicts.define(Name::new("/n"), Value::Int(2)), Ok(()));
        dicts.push(Dictionary::default());
        assert_eq!(dicts.define(Name::new("/n"), Value::Int(3)), Ok(()));
        assert_eq!(dicts.lookup("n"), Some(Value::Int(3)));
        assert!(dicts.pop().is_some());
        assert_eq!(dicts.lookup("n"), Some(Value::Int(2)));
    }

    #[test]
    fn lookup_falls_through_to_outer_frames() {
        let mut dicts = DictStack::new();
        assert_eq!(dicts.define(Name::new("/x"), Value::Bool(true)), Ok(()));
        dicts.push(Dictionary::default());
        assert_eq!(dicts.lookup("x"), Some(Value::Bool(true)));
        assert_eq!(dicts.lookup("y"), None);
    }

    #[test]
    fn invalid_names_are_rejected() {
        let mut dicts = DictStack::new();
        for name in ["n", "/1n", "/my_var", "/"] {
            assert_eq!(
                dicts.define(Name::new(name), Value::Int(1)),
                Err(EvalError::InvalidName {
                    name: name.to_owned()
                })
            );
        }
        assert!(dicts.is_empty());
    }

    #[test]
    fn frames_below_the_floor_are_not_popped() {
        let mut dicts = DictStack::new();
        assert_eq!(dicts.define(Name::new("/n"), Value::Int(1)), Ok(()));
        dicts.push(Dictionary::default());
        let previous = dicts.raise_floor();
        assert_eq!((previous, dicts.floor()), (0, 2));

        dicts.push(Dictionary::default());
        assert!(dicts.pop().is_some());
        assert!(dicts.pop().is_none());
        assert_eq!(dicts.depth(), 2);

        dicts.restore_floor(previous);
        assert!(dicts.pop().is_some());
        assert_eq!(dicts.depth(), 1);
    }

    #[test]
    fn frames_are_shared_with_their_dictionary() {
        let frame = Dictionary::default();
        let mut dicts = DictStack::new();
        dicts.push(frame.clone());
        assert_eq!(dicts.define(Name::new("/k"), Value::Int(7)), Ok(()));
        assert_eq!(frame.borrow().get(&Name::new("/k")), Some(&Value::Int(7)));
    }
}
