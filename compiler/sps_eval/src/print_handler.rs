//! Output sink for `stack` and `=`.
//!
//! - `Stdout`: the command line driver
//! - `Buffer`: tests and embedders that inspect what a program printed
//! - `Silent`: discard everything
//!
//! Enum dispatch keeps the per-line call static.

use std::sync::Arc;

use parking_lot::Mutex;

/// Captures printed lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
    }

    /// Everything printed since creation or the last [`clear`](Self::clear).
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout,
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    /// Write one line followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buffer) => buffer.println(line),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for sinks that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.output(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.clear();
        }
    }
}

/// A print sink shared between an interpreter and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_lines() {
        let handler = buffer_handler();
        handler.println("4.0");
        handler.println("[1 2]");
        assert_eq!(handler.output(), "4.0\n[1 2]\n");
    }

    #[test]
    fn buffer_clear_empties_output() {
        let handler = BufferPrintHandler::new();
        handler.println("true");
        handler.clear();
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn shared_handles_see_the_same_buffer() {
        let handler = buffer_handler();
        let reader = Arc::clone(&handler);
        handler.println("-dict-");
        assert_eq!(reader.output(), "-dict-\n");
    }

    #[test]
    fn non_capturing_sinks_report_nothing() {
        let silent = silent_handler();
        silent.println("dropped");
        silent.clear();
        assert_eq!(silent.output(), "");
        assert_eq!(stdout_handler().output(), "");
    }
}
