//! Faults raised while executing a program.
//!
//! Every operator checks its operands before consuming them, so an `EvalError` always
//! leaves the operand stack as it was before the failing operator ran. Whether a fault
//! is recovered or aborts the run is decided by [`EvalMode::is_fatal`](crate::EvalMode::is_fatal).

use sps_parse::ParseError;

/// Result of an operator or an execution step.
pub type EvalResult<T = ()> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("stack underflow: `{op}` needs {needed} operand(s), found {found}")]
    StackUnderflow {
        op: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("type mismatch: `{op}` expected {expected}, found {found}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// An index or count outside what the operand allows.
    #[error("range check: `{op}` got {index}, valid range is 0..{len}")]
    RangeCheck {
        op: &'static str,
        index: i64,
        len: usize,
    },

    /// Division or modulo by zero.
    #[error("undefined result: `{op}` by zero")]
    UndefinedResult { op: &'static str },

    #[error("invalid name `{name}`: expected `/`, a letter, then letters or digits")]
    InvalidName { name: String },

    #[error("name not found: `{name}`")]
    NameNotFound { name: String },

    /// A binding exists but holds zero, `false`, or an empty container, and the
    /// compatible lookup policy treats it as missing.
    #[error("name `{name}` is bound to `{value}`, which is treated as not found")]
    FalsyBinding { name: String, value: String },

    /// A program element that is not a literal, an operator, a name literal, or a name.
    #[error("invalid input: `{text}`")]
    InvalidInput { text: String },

    #[error("dictionary stack underflow: `end` without a matching `begin`")]
    DictStackUnderflow,

    #[error("`for` step must not be zero")]
    DegenerateLoopStep,

    #[error("maximum recursion depth exceeded (limit: {depth})")]
    RecursionLimit { depth: usize },
}

/// Why [`Interpreter::run`](crate::Interpreter::run) did not finish.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// The program never started: its text is structurally invalid.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A fatal fault stopped the run. Effects up to the fault remain on the stacks.
    #[error("run aborted: {0}")]
    Aborted(EvalError),
}
