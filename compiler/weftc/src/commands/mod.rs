//! Command handlers for the `weft` CLI.
//!
//! Each handler prints its own output and returns the process exit code:
//! [`EXIT_OK`], [`EXIT_ERROR`] for lex/parse/execution failures and
//! [`EXIT_SECURITY`] when the security policy rejected the input.

use std::io::{IsTerminal, Read};

use weft_diagnostic::emitter::{self, ColorMode};

use crate::config::parse_limit;
use crate::{Error, Interpreter, InterpreterConfig};

mod check;
mod debug;
mod deny;
mod run;

pub use check::{check_files, check_source, CheckOutcome};
pub use debug::{lex_file, parse_file};
pub use deny::{deny_name, describe_name};
pub use run::run_file;

pub const EXIT_OK: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_SECURITY: i32 = 2;

/// Options shared by every command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: InterpreterConfig,
    /// Emit JSON instead of the human-readable form (`parse`, `run`).
    pub json: bool,
    pub color: ColorMode,
}

impl CliOptions {
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::new(self.config)
    }
}

/// Split `args` into options and positional arguments.
///
/// `base` is usually [`InterpreterConfig::from_env`]; flags override it.
/// A lone `-` is positional (stdin).
pub fn parse_cli(
    args: &[String],
    base: InterpreterConfig,
) -> Result<(CliOptions, Vec<String>), String> {
    let mut options = CliOptions {
        config: base,
        ..CliOptions::default()
    };
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.config.max_depth =
                parse_limit("--max-depth", value).map_err(|e| e.to_string())?;
        } else if let Some(value) = arg.strip_prefix("--max-chain=") {
            options.config.max_chain_length =
                parse_limit("--max-chain", value).map_err(|e| e.to_string())?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = match value {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => return Err(format!("invalid --color value '{value}' (auto, always, never)")),
            };
        } else {
            match arg.as_str() {
                "--strict" => options.config.strict_literals = true,
                "--denylist-only" => options.config.denylist_only = true,
                "--json" => options.json = true,
                "-" => positional.push(arg.clone()),
                flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
                _ => positional.push(arg.clone()),
            }
        }
    }

    Ok((options, positional))
}

/// Process exit code for a failed input.
pub fn exit_code(err: &Error) -> i32 {
    if err.is_security() {
        EXIT_SECURITY
    } else {
        EXIT_ERROR
    }
}

/// Read a source file, or stdin for `-`.
pub fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
            .map_err(|e| format!("error reading stdin: {e}"));
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Print a full diagnostic for `err` to stderr and return its exit code.
fn report(path: &str, source: &str, err: &Error, color: ColorMode) -> i32 {
    let diagnostic = err.to_diagnostic();
    let colors = color.should_use_colors(std::io::stderr().is_terminal());
    eprintln!("{}", emitter::format_summary(&diagnostic, path, source));
    eprint!("{}", emitter::render(&diagnostic, source, colors));
    exit_code(err)
}

/// Read `path` or print why it cannot be read.
fn load(path: &str) -> Result<String, i32> {
    read_source(path).map_err(|msg| {
        eprintln!("{msg}");
        EXIT_ERROR
    })
}
