//! SPS command line driver.

mod commands;
mod tracing_setup;

use commands::{eval_source, lex_file, parse_file, parse_run_options, repl, run_file};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        repl(&commands::RunOptions::default());
        return;
    };

    let ok = match command.as_str() {
        "run" => {
            let (options, positional) = options_or_exit(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("Usage: sps run <file> [--hardened] [--max-depth=<n>]");
                std::process::exit(1);
            };
            run_file(path, &options)
        }
        "eval" => {
            let (options, positional) = options_or_exit(&args[2..]);
            if positional.is_empty() {
                eprintln!("Usage: sps eval <program> [--hardened] [--max-depth=<n>]");
                std::process::exit(1);
            }
            eval_source(&positional.join(" "), &options)
        }
        "repl" => {
            let (options, _) = options_or_exit(&args[2..]);
            repl(&options);
            true
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sps lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: sps parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-v" => {
            println!("sps {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            // A bare source file path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| {
                    ext.eq_ignore_ascii_case("ps") || ext.eq_ignore_ascii_case("sps")
                })
            {
                let (options, _) = options_or_exit(&args[2..]);
                run_file(command, &options)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn options_or_exit(args: &[String]) -> (commands::RunOptions, Vec<&str>) {
    match parse_run_options(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("SPS, a small PostScript-like stack language");
    println!();
    println!("Usage: sps [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file>          Run a program file");
    println!("  eval <program>      Run a program given on the command line");
    println!("  repl                Interactive session (default with no command)");
    println!("  lex <file>          Tokenize and display lexemes");
    println!("  parse <file>        Parse and display the program tree");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Run options:");
    println!("  --hardened          Push falsy bindings and recover from `end` underflow");
    println!("                      and zero `for` steps instead of aborting");
    println!("  --max-depth=<n>     Maximum procedure nesting (default: 10000)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable logging, e.g. RUST_LOG=sps_eval=debug");
    println!("  SPS_LOG_TREE        Render nested procedure calls as an indented tree");
}
