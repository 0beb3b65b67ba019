//! Weft CLI
//!
//! Tokenize, parse, run and check Weft UI programs against the standard
//! capability context.

use weftc::commands::{
    check_files, deny_name, lex_file, parse_cli, parse_file, run_file, CliOptions, EXIT_ERROR,
    EXIT_OK,
};
use weftc::{init_tracing, InterpreterConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let code = match command {
        "help" | "--help" | "-h" => {
            print_usage();
            EXIT_OK
        }
        "version" | "--version" | "-V" => {
            println!("weft {}", env!("CARGO_PKG_VERSION"));
            EXIT_OK
        }
        "lex" | "parse" | "run" | "check" | "deny" => dispatch(command, &args[2..]),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

fn dispatch(command: &str, rest: &[String]) -> i32 {
    let base = match InterpreterConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return EXIT_ERROR;
        }
    };
    let (options, positional) = match parse_cli(rest, base) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            return EXIT_ERROR;
        }
    };

    match command {
        "deny" => deny_name(positional.first().map(String::as_str)),
        "check" => {
            if positional.is_empty() {
                eprintln!("Usage: weft check <file...> [options]");
                return EXIT_ERROR;
            }
            check_files(&positional, &options)
        }
        _ => single_file(command, &positional, &options),
    }
}

fn single_file(command: &str, positional: &[String], options: &CliOptions) -> i32 {
    let [path] = positional else {
        eprintln!("Usage: weft {command} <file | -> [options]");
        return EXIT_ERROR;
    };
    match command {
        "lex" => lex_file(path, options),
        "parse" => parse_file(path, options),
        _ => run_file(path, options),
    }
}

fn print_usage() {
    println!("Weft: sandboxed UI DSL interpreter");
    println!();
    println!("Usage: weft <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display tokens (comments included)");
    println!("  parse <file>         Parse and display the AST");
    println!("  run <file>           Execute against the standard context");
    println!("  check <files...>     Execute many files in parallel, report failures");
    println!("  deny [name]          Show how the policy classifies a method name");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Use `-` as the file to read from stdin.");
    println!();
    println!("Options:");
    println!("  --max-depth=N        Maximum nesting depth (default: 64)");
    println!("  --max-chain=N        Maximum method chain length (default: 128)");
    println!("  --strict             Reject string literals with shell/path patterns");
    println!("  --denylist-only      Do not restrict names to the context's operations");
    println!("  --json               JSON output for `parse` and `run`");
    println!("  --color=<mode>       Diagnostics coloring: auto, always, never");
    println!();
    println!("Environment:");
    println!("  WEFT_MAX_DEPTH, WEFT_MAX_CHAIN, WEFT_STRICT   Defaults for the options above");
    println!("  RUST_LOG                                      Enable tracing (e.g. weft_eval=debug)");
    println!();
    println!("Exit status: 0 success, 1 error, 2 security rejection");
    println!();
    println!("Examples:");
    println!("  weft run page.weft");
    println!("  echo 'text(\"hi\").bold' | weft run - --json");
    println!("  weft check views/*.weft --strict");
    println!("  weft deny instance_eval");
}
