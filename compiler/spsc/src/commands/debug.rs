//! Debug commands: `lex` and `parse` for inspecting the front end.

use sps_ir::Value;

use super::{read_file, render_parse_error};

/// Tokenize a file and display the lexemes.
pub fn lex_file(path: &str) -> bool {
    let content = read_file(path);
    match sps_lexer::tokenize(&content) {
        Ok(lexemes) => {
            println!("Lexemes for '{}' ({} lexemes):", path, lexemes.len());
            for lexeme in &lexemes {
                println!("  {:?} `{}` @ {:?}", lexeme.kind, lexeme.text, lexeme.span);
            }
            true
        }
        Err(err) => {
            eprint!(
                "{}",
                render_parse_error(path, &content, &sps_parse::ParseError::Lex(err))
            );
            false
        }
    }
}

fn print_tree(items: &[Value], indent: usize) {
    for item in items {
        match item {
            Value::Proc(body) => {
                println!("{:indent$}procedure ({} items)", "", body.len());
                print_tree(body.body(), indent + 2);
            }
            other => println!("{:indent$}{} {other}", "", other.type_name()),
        }
    }
}

/// Parse a file and display the program tree.
pub fn parse_file(path: &str) -> bool {
    let content = read_file(path);
    match sps_parse::parse(&content) {
        Ok(program) => {
            println!("Parse result for '{path}':");
            println!("  Items: {}", program.len());
            println!();
            print_tree(&program, 2);
            println!();
            println!("Normalized:");
            println!("  {program}");
            true
        }
        Err(err) => {
            eprint!("{}", render_parse_error(path, &content, &err));
            false
        }
    }
}
