//! Classification of a single lexeme into a program element.

use sps_ir::{Builtin, Name, Span, Value, NAME_MARKER};

use crate::{parse_array, ParseError};

/// Convert one token's text into a value.
///
/// Classification order: integer, negative integer, real (exactly one `.`), boolean,
/// array literal, then symbol. Symbols resolve to a built-in operator, a name literal
/// (`/x`), an executable name (`x`), or an unknown symbol, in that order.
pub fn convert(token: &str) -> Result<Value, ParseError> {
    convert_at(token, Span::new(0, token.len()))
}

pub(crate) fn convert_at(token: &str, span: Span) -> Result<Value, ParseError> {
    if let Some(value) = integer(token, span)? {
        return Ok(value);
    }
    if is_real(token) {
        if let Ok(real) = token.parse::<f64>() {
            return Ok(Value::Real(real));
        }
    }
    match token {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if token.starts_with('[') {
        return parse_array(token, span.start);
    }
    Ok(symbol(token))
}

#[inline]
fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn integer(token: &str, span: Span) -> Result<Option<Value>, ParseError> {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    if !is_digits(unsigned) {
        return Ok(None);
    }
    token
        .parse::<i64>()
        .map(|n| Some(Value::Int(n)))
        .map_err(|_| ParseError::IntegerOverflow {
            text: token.to_owned(),
            span,
        })
}

/// Digits with exactly one `.` and at least one digit, optionally negative.
fn is_real(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let Some((whole, fraction)) = unsigned.split_once('.') else {
        return false;
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && digits(fraction) && (whole.len() + fraction.len()) > 0
}

fn symbol(token: &str) -> Value {
    if let Some(op) = Builtin::from_symbol(token) {
        Value::Operator(op)
    } else if token.starts_with(NAME_MARKER) {
        Value::Name(Name::new(token))
    } else if Name::is_identifier(token) {
        Value::Call(Name::new(token))
    } else {
        Value::Unknown(Name::new(token))
    }
}
