//! Sub-tokenizer for captured array literals.

use logos::Logos;
use sps_ir::Span;

/// Lexical class inside an array literal.
#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum ArrayTokenKind {
    #[token("[")]
    Open,

    #[token("]")]
    Close,

    /// Digits and dots, optionally negative. Whether it is a valid number is the
    /// parser's call (`1.2.3` lexes as one number token).
    #[regex(r"-?[0-9][0-9.]*", priority = 3)]
    Number,

    /// Anything else up to the next bracket or whitespace.
    #[regex(r"[^\s\[\]]+", priority = 1)]
    Other,
}

/// One token of an array literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayLexeme<'src> {
    pub kind: ArrayTokenKind,
    pub text: &'src str,
    pub span: Span,
}

/// Explode a captured array literal into brackets and element tokens.
///
/// `offset` is where `literal` starts in the program text, so spans stay absolute.
pub fn tokenize_array(literal: &str, offset: usize) -> Vec<ArrayLexeme<'_>> {
    let mut lexer = ArrayTokenKind::lexer(literal);
    let mut lexemes = Vec::new();
    while let Some(result) = lexer.next() {
        let range = lexer.span();
        lexemes.push(ArrayLexeme {
            kind: result.unwrap_or(ArrayTokenKind::Other),
            text: lexer.slice(),
            span: Span::new(range.start + offset, range.end + offset),
        });
    }
    lexemes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(literal: &str) -> Vec<&str> {
        tokenize_array(literal, 0).iter().map(|l| l.text).collect()
    }

    #[test]
    fn flat_array() {
        assert_eq!(texts("[1 2 3 4]"), vec!["[", "1", "2", "3", "4", "]"]);
    }

    #[test]
    fn nested_array() {
        assert_eq!(
            texts("[1 2 [3 4] 5]"),
            vec!["[", "1", "2", "[", "3", "4", "]", "5", "]"]
        );
    }

    #[test]
    fn reals_and_negatives() {
        let lexemes = tokenize_array("[-1 2.5]", 0);
        let kinds: Vec<ArrayTokenKind> = lexemes.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArrayTokenKind::Open,
                ArrayTokenKind::Number,
                ArrayTokenKind::Number,
                ArrayTokenKind::Close,
            ]
        );
        assert_eq!(lexemes[1].text, "-1");
        assert_eq!(lexemes[2].text, "2.5");
    }

    #[test]
    fn words_are_other() {
        let lexemes = tokenize_array("[1 abc 2x]", 0);
        assert_eq!(lexemes[2].kind, ArrayTokenKind::Other);
        assert_eq!(lexemes[2].text, "abc");
        assert_eq!(lexemes[3].kind, ArrayTokenKind::Other);
        assert_eq!(lexemes[3].text, "2x");
    }

    #[test]
    fn spans_are_absolute() {
        let lexemes = tokenize_array("[7]", 10);
        assert_eq!(lexemes[1].span, Span::new(11, 12));
    }
}
