//! Tokenizer for SPS using logos.
//!
//! Program text becomes a flat sequence of [`Lexeme`]s. Lexical classes, in the order
//! they win ties:
//! - names, with an optional `/` marker (`dup`, `/square`, `true`)
//! - bracketed array literals, captured whole including nested brackets (`[1 [2 3]]`)
//! - integer and real literals, optionally negative
//! - runs of braces, one lexeme per run (`}}`)
//! - any other single non-whitespace character (`=`, `(`)
//!
//! Whitespace and `%` comments are discarded. A bracketed literal is exploded later by
//! the narrower [`tokenize_array`] sub-tokenizer.

mod array;

pub use array::{tokenize_array, ArrayLexeme, ArrayTokenKind};

use logos::Logos;
use sps_ir::Span;

/// What went wrong while scanning.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// Input no lexical class accepts.
    #[default]
    #[error("unexpected input")]
    Unexpected,
    /// A `[` without its matching `]`.
    #[error("unclosed array literal")]
    UnclosedArray,
    /// A character that cannot appear between `[` and `]`.
    #[error("character `{0}` is not allowed inside an array literal")]
    InvalidArrayCharacter(char),
}

/// A scanning failure and where it happened.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Lexical class of a [`Lexeme`].
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
#[logos(skip r"%[^\n]*")]
pub enum LexemeKind {
    /// Executable name or `/`-prefixed name literal.
    #[regex(r"/?[a-zA-Z][a-zA-Z0-9_]*", priority = 3)]
    Name,

    /// `[ ... ]`, captured up to the matching close bracket.
    #[token("[", scan_array_literal)]
    ArrayLiteral,

    /// A `]` that closes nothing.
    #[token("]")]
    CloseBracket,

    #[regex(r"-?[0-9]+", priority = 3)]
    Integer,

    #[regex(r"-?[0-9]+\.[0-9]+", priority = 3)]
    Real,

    /// One or more consecutive `{` / `}` characters.
    #[regex(r"[{}]+", priority = 3)]
    Braces,

    /// Any other single non-whitespace character.
    #[regex(r"[^\s]", priority = 1)]
    Symbol,
}

/// Extend an array literal from its opening `[` to the matching `]`.
fn scan_array_literal(lex: &mut logos::Lexer<'_, LexemeKind>) -> Result<(), LexErrorKind> {
    let mut depth = 1usize;
    for (offset, c) in lex.remainder().char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    lex.bump(offset + 1);
                    return Ok(());
                }
            }
            c if c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '.' | '-' | '_' | '!') => {}
            other => {
                lex.bump(offset);
                return Err(LexErrorKind::InvalidArrayCharacter(other));
            }
        }
    }
    let rest = lex.remainder().len();
    lex.bump(rest);
    Err(LexErrorKind::UnclosedArray)
}

/// One token: its class, its exact source text, and where it came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub kind: LexemeKind,
    pub text: &'src str,
    pub span: Span,
}

/// Tokenize a whole program.
///
/// Fails only on a malformed array literal; every other character belongs to some
/// lexical class.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme<'_>>, LexError> {
    let mut lexer = LexemeKind::lexer(source);
    let mut lexemes = Vec::new();
    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(kind) => lexemes.push(Lexeme {
                kind,
                text: lexer.slice(),
                span,
            }),
            Err(kind) => return Err(LexError { kind, span }),
        }
    }
    Ok(lexemes)
}

#[cfg(test)]
mod tests;
