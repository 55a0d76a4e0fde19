//! The code-block grammar.

use sps_ir::{Span, Value};
use sps_lexer::{Lexeme, LexemeKind};
use sps_stack::ensure_sufficient_stack;

use crate::array::parse_array;
use crate::convert::convert_at;
use crate::{ParseError, Program};

/// A lexeme with brace runs split into single braces.
enum Item<'src> {
    Open(Span),
    Close(Span),
    Atom(&'src Lexeme<'src>),
}

fn items<'a>(lexemes: &'a [Lexeme<'a>]) -> impl Iterator<Item = Item<'a>> + 'a {
    lexemes.iter().flat_map(|lexeme| -> Vec<Item<'a>> {
        if lexeme.kind != LexemeKind::Braces {
            return vec![Item::Atom(lexeme)];
        }
        lexeme
            .text
            .char_indices()
            .map(|(i, c)| {
                let span = Span::new(lexeme.span.start + i, lexeme.span.start + i + 1);
                if c == '{' {
                    Item::Open(span)
                } else {
                    Item::Close(span)
                }
            })
            .collect()
    })
}

/// Pair braces into nested procedures and convert every other lexeme.
pub fn group(lexemes: &[Lexeme<'_>]) -> Result<Program, ParseError> {
    let mut items = items(lexemes);
    let body = block(&mut items, None)?;
    Ok(Program::new(body))
}

fn block<'a, I>(items: &mut I, open: Option<Span>) -> Result<Vec<Value>, ParseError>
where
    I: Iterator<Item = Item<'a>>,
{
    let mut body = Vec::new();
    while let Some(item) = items.next() {
        match item {
            Item::Open(span) => {
                let inner = ensure_sufficient_stack(|| block(items, Some(span)))?;
                tracing::trace!(?span, len = inner.len(), "grouped code block");
                body.push(Value::procedure(inner));
            }
            Item::Close(span) => {
                return match open {
                    Some(_) => Ok(body),
                    None => Err(ParseError::UnmatchedClose { span }),
                };
            }
            Item::Atom(lexeme) => body.push(atom(lexeme)?),
        }
    }
    match open {
        Some(span) => Err(ParseError::UnclosedBlock { span }),
        None => Ok(body),
    }
}

fn atom(lexeme: &Lexeme<'_>) -> Result<Value, ParseError> {
    match lexeme.kind {
        LexemeKind::CloseBracket => Err(ParseError::UnmatchedBracket { span: lexeme.span }),
        LexemeKind::ArrayLiteral => parse_array(lexeme.text, lexeme.span.start),
        _ => convert_at(lexeme.text, lexeme.span),
    }
}
