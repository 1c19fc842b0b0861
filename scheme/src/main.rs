use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use scheme_engine::{Env, Value};

/// A tree-walking Scheme interpreter.
#[derive(Parser)]
struct Cli {
    /// Source file to run. Starts an interactive REPL when omitted.
    source: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.source {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

fn run_file(path: &PathBuf) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read {}: {err}", path.display());
            std::process::exit(1);
        }
    };

    let env = Env::empty();
    match scheme_engine::run(&source, &env) {
        Ok(values) => {
            for value in values {
                print_value(&value);
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run_repl() {
    let env = Env::empty();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut buf = String::new();
    let mut count = 0;

    loop {
        if buf.is_empty() {
            count += 1;
            print!("{count} > ");
        } else {
            print!("{count} | ");
        }
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("error: reading stdin: {err}");
                return;
            }
            None => return,
        };

        buf.push_str(&line);
        buf.push('\n');

        if !balanced(&buf) {
            continue;
        }
        if buf.trim().is_empty() {
            buf.clear();
            continue;
        }

        match scheme_engine::run(&buf, &env) {
            Ok(values) => {
                let terminated = values.last().is_some_and(|v| matches!(v, Value::Terminate));
                for value in values {
                    print_value(&value);
                }
                if terminated {
                    return;
                }
            }
            Err(err) => eprintln!("error: {err}"),
        }

        buf.clear();
    }
}

fn print_value(value: &Value) {
    if !matches!(value, Value::Void | Value::Terminate) {
        println!("{value}");
    }
}

/// Whether `source` has no unmatched `(`, so the REPL should stop buffering
/// and try to read it as a complete set of top-level forms.
fn balanced(source: &str) -> bool {
    let mut depth = 0i32;
    for c in source.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }
    depth <= 0
}
