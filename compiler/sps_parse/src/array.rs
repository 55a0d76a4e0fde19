//! The numeric-array grammar.

use std::slice;

use sps_ir::{Span, Value};
use sps_lexer::{tokenize_array, ArrayLexeme, ArrayTokenKind};
use sps_stack::ensure_sufficient_stack;

use crate::convert::convert_at;
use crate::ParseError;

/// Parse one captured array literal into a (possibly nested) numeric array.
///
/// `offset` is where `literal` starts in the program text, so error spans stay
/// absolute.
pub fn parse_array(literal: &str, offset: usize) -> Result<Value, ParseError> {
    let lexemes = tokenize_array(literal, offset);
    let mut cursor = lexemes.iter();
    let open = match cursor.next() {
        Some(first) if first.kind == ArrayTokenKind::Open => first.span,
        Some(first) => return Err(unexpected(first)),
        None => {
            return Err(ParseError::UnclosedArray {
                span: Span::point(offset),
            })
        }
    };
    let items = collect(&mut cursor, open)?;
    if let Some(trailing) = cursor.next() {
        return Err(unexpected(trailing));
    }
    Ok(Value::array(items))
}

fn collect(
    cursor: &mut slice::Iter<'_, ArrayLexeme<'_>>,
    open: Span,
) -> Result<Vec<Value>, ParseError> {
    let mut items = Vec::new();
    while let Some(lexeme) = cursor.next() {
        match lexeme.kind {
            ArrayTokenKind::Open => {
                let nested = ensure_sufficient_stack(|| collect(cursor, lexeme.span))?;
                items.push(Value::array(nested));
            }
            ArrayTokenKind::Close => return Ok(items),
            ArrayTokenKind::Number => match convert_at(lexeme.text, lexeme.span)? {
                number @ (Value::Int(_) | Value::Real(_)) => items.push(number),
                _ => return Err(unexpected(lexeme)),
            },
            ArrayTokenKind::Other => return Err(unexpected(lexeme)),
        }
    }
    Err(ParseError::UnclosedArray { span: open })
}

fn unexpected(lexeme: &ArrayLexeme<'_>) -> ParseError {
    if lexeme.kind == ArrayTokenKind::Close {
        ParseError::UnmatchedBracket { span: lexeme.span }
    } else {
        ParseError::InvalidArrayElement {
            text: lexeme.text.to_owned(),
            span: lexeme.span,
        }
    }
}
