//! Ithilios interpreter CLI.

use ilic::commands::{lex_file, parse_file, parse_options, run_file, run_repl};
use ili_eval::DEFAULT_MAX_CALL_DEPTH;
use ilic::{Session, SessionConfig, VERSION};

fn main() {
    ilic::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    let (config, args) = match parse_options(&args, no_color) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let Some(command) = args.first() else {
        start_repl(config);
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: ili run <file.ili>");
                std::process::exit(1);
            };
            run_file(path, config);
        }
        "lex" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: ili lex <file.ili>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: ili parse <file.ili>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Ithilios {VERSION}");
        }
        _ if command.starts_with('-') => {
            eprintln!("Unknown option: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
        // Anything else is a file to run; non-.ili paths are rejected there.
        _ => run_file(command, config),
    }
}

fn start_repl(config: SessionConfig) {
    let config = SessionConfig {
        echo_values: true,
        ..config
    };
    let mut session = Session::stderr(config);
    let stdin = std::io::stdin();
    if let Err(e) = run_repl(stdin.lock(), std::io::stdout(), &mut session) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Ithilios Language Interpreter");
    println!();
    println!("Usage: ili [options] [command] [file.ili]");
    println!();
    println!("Commands:");
    println!("  <file.ili>           Run an Ithilios program");
    println!("  run <file.ili>       Run an Ithilios program");
    println!("  lex <file.ili>       Tokenize and display tokens");
    println!("  parse <file.ili>     Parse and display the AST");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("With no command, starts an interactive session.");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!("  --max-depth=<n>      Limit nested function calls to n (default {DEFAULT_MAX_CALL_DEPTH})");
    println!();
    println!("Environment:");
    println!("  NO_COLOR             Disable diagnostic colors unless --color is given");
    println!("  RUST_LOG             Enable tracing, e.g. RUST_LOG=ili_eval=trace");
    println!("  ILI_LOG_TREE=1       Render tracing output as an indented tree");
}
