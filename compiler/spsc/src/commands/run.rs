//! Run commands: `run <file>` and `eval <program>`.

use super::{read_file, report_run, RunOptions};

/// Run a program file against a fresh stdout session.
pub fn run_file(path: &str, options: &RunOptions) -> bool {
    let source = read_file(path);
    let mut interpreter = options.interpreter();
    report_run(&mut interpreter, path, &source)
}

/// Run a program given inline.
pub fn eval_source(source: &str, options: &RunOptions) -> bool {
    let mut interpreter = options.interpreter();
    report_run(&mut interpreter, "<eval>", source)
}
