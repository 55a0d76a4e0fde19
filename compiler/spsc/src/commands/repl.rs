//! Interactive session. The operand and dictionary stacks persist between lines.

use std::io::{self, BufRead, Write};

use super::{report_run, RunOptions};

const PROMPT: &str = "sps> ";

pub fn repl(options: &RunOptions) {
    let mut interpreter = options.interpreter();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return;
        }
        let Some(Ok(line)) = lines.next() else {
            println!();
            return;
        };
        match line.trim() {
            "quit" => return,
            "" => {}
            source => {
                report_run(&mut interpreter, "<repl>", source);
            }
        }
    }
}
