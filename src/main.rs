//! Command-line host: a file runner and an interactive REPL.
//!
//! Deliberately reads `std::env::args()` directly rather than going
//! through a CLI-parsing crate — the only accepted shapes are "no
//! arguments" (REPL), "one argument" (run a script), and "more than one"
//! (a usage error), which a parser framework doesn't buy anything for.

use std::io::{self, Write};
use std::process::ExitCode;

use lox::diagnostics::Diagnostics;
use lox::interpreter::Interpreter;
use lox::lexer::Lexer;
use lox::parser::Parser;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => {
            run_prompt();
            ExitCode::SUCCESS
        }
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: lox [script]");
            ExitCode::from(64)
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Could not read '{path}': {err}");
            return ExitCode::from(64);
        }
    };

    let mut diagnostics = Diagnostics::new();
    let mut interpreter = Interpreter::new();
    run(&source, &mut interpreter, &mut diagnostics);

    if diagnostics.had_error() {
        ExitCode::from(65)
    } else if diagnostics.had_runtime_error() {
        ExitCode::from(70)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_prompt() {
    let mut diagnostics = Diagnostics::new();
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break, // EOF (e.g. Ctrl-D)
            Ok(_) => {
                diagnostics.reset();
                run(&line, &mut interpreter, &mut diagnostics);
            }
            Err(_) => break,
        }
    }
}

fn run(source: &str, interpreter: &mut Interpreter, diagnostics: &mut Diagnostics) {
    let tokens = Lexer::new(source, diagnostics).scan_tokens();
    let statements = Parser::new(tokens, diagnostics).parse();

    if diagnostics.had_error() {
        return;
    }

    interpreter.interpret(&statements, diagnostics);
}
