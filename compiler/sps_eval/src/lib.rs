#![deny(clippy::arithmetic_side_effects)]
//! Execution engine for SPS programs.
//!
//! An [`Interpreter`] is one session: it owns the operand stack, the dictionary stack,
//! the recovered-fault log, and a print sink. Programs are parsed by `sps_parse` and
//! executed element by element:
//!
//! - literals (numbers, booleans, arrays, procedures, name literals) are pushed;
//! - operators read their operands from the operand stack;
//! - names are looked up in the dictionary stack, and a bound procedure is executed
//!   while any other bound value is pushed.
//!
//! Faults are reported and skipped unless the active [`EvalMode`] says they abort
//! the run.

mod dict_stack;
mod errors;
mod eval_mode;
mod interpreter;
mod operand_stack;
mod operators;
mod print_handler;

pub use dict_stack::DictStack;
pub use errors::{EvalError, EvalResult, RunError};
pub use eval_mode::{EvalMode, DEFAULT_MAX_DEPTH};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operand_stack::OperandStack;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use sps_ir::{Builtin, Dictionary, Name, Value};
