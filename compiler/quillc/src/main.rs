//! Quill CLI
//!
//! Tree-walking interpreter for the Quill language.

use std::io::{self, IsTerminal, Write};

use quillc::{
    init_tracing, lex_source, parse_run_options, parse_source_to, read_file, repl, run_file,
    Outcome, Reporter, EXIT_USAGE,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_USAGE);
    }

    let color = io::stdout().is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = &args[1];
    let result = match command.as_str() {
        "run" => {
            let options = match parse_run_options(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: quill run <file> [--max-depth=N | --no-depth-limit]");
                    std::process::exit(EXIT_USAGE);
                }
            };
            let source = read_or_exit(&options.path);
            run_file(&options, &source, color, &mut out).map(Outcome::exit_code)
        }
        "lex" => {
            let path = path_or_exit(&args, "lex");
            let source = read_or_exit(path);
            lex_source(&source, &mut out).map(Outcome::exit_code)
        }
        "parse" => {
            let path = path_or_exit(&args, "parse");
            let source = read_or_exit(path);
            let reporter = Reporter::new(path).with_color(color);
            parse_source_to(&source, &reporter, &mut out).map(Outcome::exit_code)
        }
        "repl" => {
            println!("Quill {}", env!("CARGO_PKG_VERSION"));
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut interpreter = quill_eval::Interpreter::new();
            repl(&mut input, &mut out, &mut interpreter, color).map(|()| 0)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(0)
        }
        "version" | "--version" | "-V" => {
            println!("Quill {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    };

    let code = match result.and_then(|code| out.flush().map(|()| code)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_USAGE
        }
    };
    std::process::exit(code);
}

fn path_or_exit<'a>(args: &'a [String], command: &str) -> &'a str {
    match args.get(2) {
        Some(path) => path.as_str(),
        None => {
            eprintln!("Usage: quill {command} <file>");
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn read_or_exit(path: &str) -> String {
    match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn print_usage() {
    println!("Quill");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>          Evaluate a program and print its result");
    println!("  lex <file>          Tokenize and display tokens");
    println!("  parse <file>        Parse and display the program");
    println!("  repl                Start an interactive session");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>     Limit nested function calls (default 10000)");
    println!("  --no-depth-limit    Disable the call-depth limit");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=quill_eval=debug) to enable logging.");
}
