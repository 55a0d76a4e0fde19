//! Parsed programs.

use std::fmt;
use std::ops::Deref;

use sps_ir::Value;

/// The top-level sequence of program elements, ready for execution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    items: Vec<Value>,
}

impl Program {
    pub fn new(items: Vec<Value>) -> Self {
        Program { items }
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }
}

impl Deref for Program {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.items
    }
}

/// Re-serializes the program as source text; parsing the output yields an equal program.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
