//! The `check` command: many files, one independent cycle each.

use rayon::prelude::*;
use weft_diagnostic::emitter;
use weft_ui::StandardContext;

use super::{exit_code, read_source, CliOptions, EXIT_ERROR, EXIT_OK};
use crate::{Error, Interpreter};

/// Result of checking one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Ok,
    /// Could not be read.
    Unreadable(String),
    /// One-line summary and exit code.
    Failed { summary: String, code: i32 },
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::Ok => EXIT_OK,
            CheckOutcome::Unreadable(_) => EXIT_ERROR,
            CheckOutcome::Failed { code, .. } => *code,
        }
    }
}

/// Interpret `source` against the standard context, discarding output.
pub fn check_source(interpreter: &Interpreter, path: &str, source: &str) -> CheckOutcome {
    match interpreter.interpret(source, &StandardContext) {
        Ok(_) => CheckOutcome::Ok,
        Err(err) => CheckOutcome::Failed {
            summary: summarize(path, source, &err),
            code: exit_code(&err),
        },
    }
}

fn summarize(path: &str, source: &str, err: &Error) -> String {
    emitter::format_summary(&err.to_diagnostic(), path, source)
}

/// Check every path in parallel; print results in input order.
///
/// Exits with the highest code seen, so one security rejection anywhere
/// makes the whole run exit 2.
pub fn check_files(paths: &[String], options: &CliOptions) -> i32 {
    let interpreter = options.interpreter();
    let outcomes: Vec<CheckOutcome> = paths
        .par_iter()
        .map(|path| match read_source(path) {
            Ok(source) => check_source(&interpreter, path, &source),
            Err(msg) => CheckOutcome::Unreadable(msg),
        })
        .collect();

    let mut failed = 0usize;
    for (path, outcome) in paths.iter().zip(&outcomes) {
        match outcome {
            CheckOutcome::Ok => println!("ok    {path}"),
            CheckOutcome::Unreadable(msg) => {
                failed += 1;
                eprintln!("{msg}");
            }
            CheckOutcome::Failed { summary, .. } => {
                failed += 1;
                eprintln!("{summary}");
            }
        }
    }
    println!();
    println!("{} checked, {failed} failed", paths.len());

    outcomes
        .iter()
        .map(CheckOutcome::exit_code)
        .max()
        .unwrap_or(EXIT_OK)
}
