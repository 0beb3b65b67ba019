//! The `run` command.

use weft_ui::StandardContext;

use super::{load, report, CliOptions, EXIT_ERROR, EXIT_OK};

/// Execute `path` against the standard context and print the tree.
pub fn run_file(path: &str, options: &CliOptions) -> i32 {
    let source = match load(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    let value = match options.interpreter().interpret(&source, &StandardContext) {
        Ok(value) => value,
        Err(err) => return report(path, &source, &err, options.color),
    };

    if options.json {
        match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error serializing output: {err}");
                return EXIT_ERROR;
            }
        }
    } else {
        print!("{value}");
        if !value.is_renderable() {
            println!();
        }
    }
    EXIT_OK
}
