//! Evaluation policies.
//!
//! The language has three behaviors whose "right" answer depends on whether a program
//! was written against the reference interpreter or expects saner semantics: a name
//! bound to a falsy value, `end` with no scope to pop, and a `for` loop stepping by
//! zero. `EvalMode` selects one policy for all three.

use crate::EvalError;

/// Default recursion budget: nested procedure calls and control-flow bodies.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Reproduces the reference interpreter's observable behavior.
    ///
    /// Falsy bindings are skipped, `end` underflow and zero `for` steps abort the run,
    /// and `begin` without a dictionary on top is a silent no-op.
    #[default]
    Compatible,
    /// Falsy bindings behave like any other value, every fault except recursion
    /// exhaustion is recovered, and `begin` without a dictionary is a type mismatch.
    Hardened,
}

impl EvalMode {
    /// Whether a found-but-falsy binding is treated as missing.
    #[inline]
    pub fn skips_falsy_bindings(self) -> bool {
        matches!(self, Self::Compatible)
    }

    /// Whether `begin` reports a fault when the operand stack has no dictionary on top.
    #[inline]
    pub fn checks_begin_operand(self) -> bool {
        matches!(self, Self::Hardened)
    }

    /// Whether `err` stops the current run instead of being reported and skipped.
    ///
    /// `RecursionLimit` is fatal in every mode.
    pub fn is_fatal(self, err: &EvalError) -> bool {
        match err {
            EvalError::RecursionLimit { .. } => true,
            EvalError::DictStackUnderflow | EvalError::DegenerateLoopStep => {
                matches!(self, Self::Compatible)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_compatible() {
        assert_eq!(EvalMode::default(), EvalMode::Compatible);
    }

    #[test]
    fn fatal_faults_per_mode() {
        let recursion = EvalError::RecursionLimit { depth: 8 };
        let underflow = EvalError::DictStackUnderflow;
        let zero_step = EvalError::DegenerateLoopStep;
        let missing = EvalError::NameNotFound { name: "x".into() };

        assert!(EvalMode::Compatible.is_fatal(&recursion));
        assert!(EvalMode::Compatible.is_fatal(&underflow));
        assert!(EvalMode::Compatible.is_fatal(&zero_step));
        assert!(!EvalMode::Compatible.is_fatal(&missing));

        assert!(EvalMode::Hardened.is_fatal(&recursion));
        assert!(!EvalMode::Hardened.is_fatal(&underflow));
        assert!(!EvalMode::Hardened.is_fatal(&zero_step));
        assert!(!EvalMode::Hardened.is_fatal(&missing));
    }

    #[test]
    fn lookup_and_begin_policies() {
        assert!(EvalMode::Compatible.skips_falsy_bindings());
        assert!(!EvalMode::Hardened.skips_falsy_bindings());
        assert!(!EvalMode::Compatible.checks_begin_operand());
        assert!(EvalMode::Hardened.checks_begin_operand());
    }
}
