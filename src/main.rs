use std::{
    cell::RefCell,
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::exit,
    rc::Rc,
};

use clap::Parser;
use interpreter::{
    display_error, eval::environment::Environment, eval::evaluator::eval_program,
    lexer::lexer::tokenize, parser::parser::parse,
};

const PROMPT: &str = ">> ";

/// An interpreter for a small expression language with first-class
/// functions. Without a file argument it starts an interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream of each input before evaluating.
    #[arg(long)]
    lexer: bool,

    /// Print the parsed program in canonical form before evaluating.
    #[arg(long)]
    parser: bool,

    /// Script file to run instead of starting the interactive shell.
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match &args.file {
        Some(file) => run_file(file, &args),
        None => run_shell(&args),
    }
}

fn run_file(file: &PathBuf, args: &Args) {
    let source = match read_to_string(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file.display(), error);
            exit(1);
        }
    };

    let env = Rc::new(RefCell::new(Environment::new()));
    if !run_source(&source, Some(file.display().to_string()), &env, args) {
        exit(1);
    }
}

fn run_shell(args: &Args) {
    println!("An interpreter for a small expression language. Ctrl-D exits.");

    // One environment for the whole session, so `let` bindings persist
    // across entries.
    let env = Rc::new(RefCell::new(Environment::new()));
    let stdin = io::stdin();

    loop {
        print!("{}", PROMPT);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        run_source(&line, None, &env, args);
    }
}

fn run_source(
    source: &str,
    file: Option<String>,
    env: &Rc<RefCell<Environment>>,
    args: &Args,
) -> bool {
    let tokens = tokenize(source.to_string(), file);

    if args.lexer {
        println!("--- tokens ---");
        for token in &tokens {
            token.debug();
        }
    }

    let (program, errors) = parse(tokens);

    // A parse with errors is never evaluated; surface every message.
    if !errors.is_empty() {
        for error in &errors {
            display_error(error, source);
        }
        return false;
    }

    if args.parser {
        println!("--- ast ---");
        println!("{}", program);
    }

    if let Some(value) = eval_program(&program, env) {
        println!("{}", value);
    }

    true
}
