//! Parse errors.

use sps_ir::Span;
use sps_lexer::LexError;

/// A structural failure that prevents a program from running at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A `}` with no pending `{`.
    #[error("unmatched `}}`")]
    UnmatchedClose { span: Span },

    /// End of input inside a `{` block; `span` is the opening brace.
    #[error("unclosed `{{`: code block is never closed")]
    UnclosedBlock { span: Span },

    /// A `]` with no pending `[`.
    #[error("unmatched `]`")]
    UnmatchedBracket { span: Span },

    /// End of literal inside a `[`; `span` is the opening bracket.
    #[error("unclosed `[`: array literal is never closed")]
    UnclosedArray { span: Span },

    #[error("array literals may only contain numbers, found `{text}`")]
    InvalidArrayElement { text: String, span: Span },

    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerOverflow { text: String, span: Span },
}

impl ParseError {
    /// Where in the source the error was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::UnmatchedClose { span }
            | ParseError::UnclosedBlock { span }
            | ParseError::UnmatchedBracket { span }
            | ParseError::UnclosedArray { span }
            | ParseError::InvalidArrayElement { span, .. }
            | ParseError::IntegerOverflow { span, .. } => *span,
        }
    }
}
