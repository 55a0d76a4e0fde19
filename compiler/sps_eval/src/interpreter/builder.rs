//! `InterpreterBuilder` for sessions with non-default policy or output.

use super::Interpreter;
use crate::eval_mode::{EvalMode, DEFAULT_MAX_DEPTH};
use crate::{stdout_handler, DictStack, OperandStack, SharedPrintHandler};

/// Builder for [`Interpreter`] sessions.
///
/// Defaults: [`EvalMode::Compatible`], stdout output, [`DEFAULT_MAX_DEPTH`].
pub struct InterpreterBuilder {
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
    max_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            mode: EvalMode::default(),
            print_handler: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Where `stack` and `=` write.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum nesting of procedure calls and control-flow bodies.
    ///
    /// Exceeding it raises `RecursionLimit`, which aborts the run in every mode.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            operands: OperandStack::new(),
            dicts: DictStack::new(),
            mode: self.mode,
            max_depth: self.max_depth,
            depth: 0,
            faults: Vec::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
