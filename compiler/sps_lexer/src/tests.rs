use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn texts(source: &str) -> Vec<&str> {
    match tokenize(source) {
        Ok(lexemes) => lexemes.into_iter().map(|l| l.text).collect(),
        Err(err) => panic!("unexpected lex error: {err}"),
    }
}

fn kinds(source: &str) -> Vec<LexemeKind> {
    match tokenize(source) {
        Ok(lexemes) => lexemes.into_iter().map(|l| l.kind).collect(),
        Err(err) => panic!("unexpected lex error: {err}"),
    }
}

#[test]
fn square_forall_program() {
    let source = "
        /square {dup mul} def
        [1 2 3 4] {square} forall
        add add add 30 eq true
        stack
    ";
    assert_eq!(
        texts(source),
        vec![
            "/square", "{", "dup", "mul", "}", "def", "[1 2 3 4]", "{", "square", "}", "forall",
            "add", "add", "add", "30", "eq", "true", "stack",
        ]
    );
}

#[test]
fn factorial_program() {
    let source = "
        [1 2 3 4 5] dup length /n exch def
        /fact {
            0 dict begin
                /n exch def
                n 2 lt
                { 1}
                {n 1 sub fact n mul }
                ifelse
            end
        } def
        n fact stack
    ";
    assert_eq!(
        texts(source),
        vec![
            "[1 2 3 4 5]", "dup", "length", "/n", "exch", "def", "/fact", "{", "0", "dict",
            "begin", "/n", "exch", "def", "n", "2", "lt", "{", "1", "}", "{", "n", "1", "sub",
            "fact", "n", "mul", "}", "ifelse", "end", "}", "def", "n", "fact", "stack",
        ]
    );
}

#[test]
fn negative_integers_and_nested_braces() {
    let source = "[9 9 8 4 10] {dup 5 lt {pop} if} forall exch 0 exch -1 1 {dup mul add} for";
    assert_eq!(
        texts(source),
        vec![
            "[9 9 8 4 10]", "{", "dup", "5", "lt", "{", "pop", "}", "if", "}", "forall", "exch",
            "0", "exch", "-1", "1", "{", "dup", "mul", "add", "}", "for",
        ]
    );
}

#[test]
fn brace_runs_are_one_lexeme() {
    assert_eq!(texts("{{1} if}}"), vec!["{{", "1", "}", "if", "}}"]);
    assert_eq!(
        kinds("{{"),
        vec![LexemeKind::Braces],
        "consecutive braces collapse into one lexeme"
    );
}

#[test]
fn literal_classes() {
    assert_eq!(
        kinds("42 -7 2.5 -0.5 true /x x ="),
        vec![
            LexemeKind::Integer,
            LexemeKind::Integer,
            LexemeKind::Real,
            LexemeKind::Real,
            LexemeKind::Name,
            LexemeKind::Name,
            LexemeKind::Name,
            LexemeKind::Symbol,
        ]
    );
}

#[test]
fn lone_minus_and_dot_are_symbols() {
    assert_eq!(
        kinds("- 1."),
        vec![LexemeKind::Symbol, LexemeKind::Integer, LexemeKind::Symbol]
    );
}

#[test]
fn comments_are_discarded() {
    let source = "1 2 % push two numbers\nadd % and sum them";
    assert_eq!(texts(source), vec!["1", "2", "add"]);
}

#[test]
fn nested_array_literal_is_one_lexeme() {
    assert_eq!(texts("[1 [2 3] 4.5] length"), vec!["[1 [2 3] 4.5]", "length"]);
    assert_eq!(texts("[]"), vec!["[]"]);
}

#[test]
fn stray_close_bracket() {
    assert_eq!(kinds("1 ]"), vec![LexemeKind::Integer, LexemeKind::CloseBracket]);
}

#[test]
fn unclosed_array_is_an_error() {
    let err = tokenize("1 [2 3").err();
    assert_eq!(
        err,
        Some(LexError {
            kind: LexErrorKind::UnclosedArray,
            span: Span::new(2, 6),
        })
    );
}

#[test]
fn code_inside_array_is_an_error() {
    let err = tokenize("[1 {dup}]").err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(LexErrorKind::InvalidArrayCharacter('{'))
    );
}

#[test]
fn spans_point_into_source() {
    let source = "  /abc  12";
    let lexemes = tokenize(source).unwrap_or_default();
    assert_eq!(lexemes.len(), 2);
    assert_eq!(&source[lexemes[0].span.to_range()], "/abc");
    assert_eq!(&source[lexemes[1].span.to_range()], "12");
}

proptest! {
    #[test]
    fn integers_lex_whole(n in any::<i32>()) {
        let source = n.to_string();
        let lexemes = tokenize(&source).unwrap_or_default();
        prop_assert_eq!(lexemes.len(), 1);
        prop_assert_eq!(lexemes[0].kind, LexemeKind::Integer);
        prop_assert_eq!(lexemes[0].text, source.as_str());
    }

    #[test]
    fn names_lex_whole(name in "/?[a-zA-Z][a-zA-Z0-9_]{0,12}") {
        let lexemes = tokenize(&name).unwrap_or_default();
        prop_assert_eq!(lexemes.len(), 1);
        prop_assert_eq!(lexemes[0].kind, LexemeKind::Name);
    }

    #[test]
    fn whitespace_separated_words_keep_their_count(
        words in proptest::collection::vec("[a-z]{1,6}|[0-9]{1,4}", 0..20)
    ) {
        let source = words.join(" ");
        let lexemes = tokenize(&source).unwrap_or_default();
        prop_assert_eq!(lexemes.len(), words.len());
    }
}
