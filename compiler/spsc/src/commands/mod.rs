//! Command implementations for the `sps` binary.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::repl;
pub use run::{eval_source, run_file};

use ariadne::{Config, Label, Report, ReportKind, Source};
use sps_eval::{EvalMode, Interpreter, RunError, DEFAULT_MAX_DEPTH};
use sps_parse::ParseError;

/// Session policy selected on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: EvalMode,
    pub max_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            mode: EvalMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RunOptions {
    /// A stdout-backed session with this policy.
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::builder()
            .mode(self.mode)
            .max_depth(self.max_depth)
            .build()
    }
}

/// Split `args` into run options and positional arguments.
pub fn parse_run_options(args: &[String]) -> Result<(RunOptions, Vec<&str>), String> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();
    for arg in args {
        if arg == "--hardened" {
            options.mode = EvalMode::Hardened;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = depth
                .parse()
                .map_err(|_| format!("invalid --max-depth value '{depth}'"))?;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg.as_str());
        }
    }
    Ok((options, positional))
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

fn label(err: &ParseError) -> &'static str {
    match err {
        ParseError::Lex(_) => "while scanning this",
        ParseError::UnmatchedClose { .. } => "this `}` closes nothing",
        ParseError::UnclosedBlock { .. } => "this `{` is never closed",
        ParseError::UnmatchedBracket { .. } => "this `]` closes nothing",
        ParseError::UnclosedArray { .. } => "this `[` is never closed",
        ParseError::InvalidArrayElement { .. } => "not a number",
        ParseError::IntegerOverflow { .. } => "out of range",
    }
}

/// Render a parse error against its source with a labelled excerpt.
pub(super) fn render_parse_error(name: &str, source: &str, err: &ParseError) -> String {
    let span = err.span();
    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, (), span.start)
        .with_config(Config::default().with_color(false))
        .with_message(err.to_string())
        .with_label(Label::new(span.to_range()).with_message(label(err)))
        .with_note(format!("in {name}"))
        .finish()
        .write(Source::from(source), &mut out);
    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("error: {err}\n"),
    }
}

/// Run `source` and print recovered faults and any failure to stderr.
///
/// Returns whether the run completed.
pub(super) fn report_run(interpreter: &mut Interpreter, name: &str, source: &str) -> bool {
    let result = interpreter.run(source);
    for fault in interpreter.take_faults() {
        eprintln!("error: {fault}");
    }
    match result {
        Ok(()) => true,
        Err(RunError::Parse(err)) => {
            eprint!("{}", render_parse_error(name, source, &err));
            false
        }
        Err(err @ RunError::Aborted(_)) => {
            eprintln!("error: {err}");
            false
        }
    }
}
