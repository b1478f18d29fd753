mod ast;
mod builtins;
mod compiler;
mod config;
mod env;
mod error;
mod eval;
mod parser;
mod symbol;
mod value;

use builtins::register_builtins;
use clap::Parser;
use env::Environment;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

/// A small Scheme-flavored Lisp interpreter
#[derive(Parser, Debug)]
#[command(name = "lisp-core")]
#[command(version = config::VERSION)]
#[command(about = "A small Scheme-flavored Lisp interpreter")]
struct CliArgs {
    /// Script file to execute (optional; if not provided, starts the REPL)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let root = Environment::new();
    register_builtins(&root);

    match args.script {
        Some(path) => run_script(&path, root),
        None => run_repl(root),
    }
}

fn run_script(path: &PathBuf, root: Rc<Environment>) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error reading {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let nodes = match parser::parse_all(&source) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for node in nodes {
        let expr = compiler::compile(&node);
        if let Err(e) = eval::eval(expr, root.clone()) {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn run_repl(root: Rc<Environment>) -> ExitCode {
    println!("{}", config::WELCOME_MESSAGE);
    println!("{}", config::WELCOME_SUBTITLE);
    println!("Type (quit) or (exit) to leave, Ctrl-D also works.\n");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("failed to start line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let history_path = ".lisp_history";
    let _ = editor.load_history(history_path);

    loop {
        match editor.readline("lisp> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);

                if trimmed == "(quit)" || trimmed == "(exit)" {
                    break;
                }
                if trimmed == "(clear)" {
                    print!("\x1B[2J\x1B[1;1H");
                    continue;
                }

                match parser::parse(trimmed) {
                    Ok(node) => {
                        let expr = compiler::compile(&node);
                        match eval::eval(expr, root.clone()) {
                            Ok(result) => println!("{}", result),
                            Err(e) => eprintln!("error: {}", e),
                        }
                    }
                    Err(e) => eprintln!("parse error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {}", e);
                break;
            }
        }
    }

    let _ = editor.save_history(history_path);
    ExitCode::SUCCESS
}
