//! Parser for SPS programs.
//!
//! Turns the flat lexeme sequence from `sps_lexer` into a [`Program`]: an ordered
//! sequence of [`sps_ir::Value`]s where each `{ ... }` block is a nested `Value::Proc` and
//! each `[ ... ]` literal is a nested numeric `Value::Array`.
//!
//! Two independent grammars are involved:
//! - the code-block grammar ([`group`]) pairs braces across the whole program;
//! - the numeric-array grammar ([`parse_array`]) re-tokenizes one captured array
//!   literal and pairs its brackets.
//!
//! Unbalanced braces or brackets fail the whole parse. No partial program is returned.

mod array;
mod convert;
mod error;
mod group;
mod program;

pub use array::parse_array;
pub use convert::convert;
pub use error::ParseError;
pub use group::group;
pub use program::Program;

/// Tokenize and group a whole program.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let lexemes = sps_lexer::tokenize(source)?;
    let program = group(&lexemes)?;
    tracing::debug!(
        lexemes = lexemes.len(),
        items = program.len(),
        "parsed program"
    );
    Ok(program)
}
