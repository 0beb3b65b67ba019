//! Inspection commands: `lex` and `parse`.

use super::{load, report, CliOptions, EXIT_ERROR, EXIT_OK};

/// Print the token stream, comments included.
pub fn lex_file(path: &str, options: &CliOptions) -> i32 {
    let source = match load(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    match weft_lexer::tokenize_with_comments(&source) {
        Ok(tokens) => {
            println!("Tokens for '{path}' ({} tokens):", tokens.len());
            for token in tokens.iter() {
                println!("  {token:?}");
            }
            EXIT_OK
        }
        Err(err) => report(path, &source, &err.into(), options.color),
    }
}

/// Parse under the denylist (no context) and print the AST.
pub fn parse_file(path: &str, options: &CliOptions) -> i32 {
    let source = match load(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let ast = match options.interpreter().parse_source(&source) {
        Ok(ast) => ast,
        Err(err) => return report(path, &source, &err, options.color),
    };

    if options.json {
        match serde_json::to_string_pretty(&ast) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error serializing AST: {err}");
                return EXIT_ERROR;
            }
        }
    } else {
        let calls = ast.method_names();
        println!("Parse result for '{path}':");
        println!("  Calls: {}", calls.len());
        if !calls.is_empty() {
            println!("  Methods: {}", calls.join(", "));
        }
        println!();
        println!("{ast:#?}");
    }
    EXIT_OK
}
