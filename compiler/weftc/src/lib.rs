//! Weft interpreter facade.
//!
//! Ties the phases together: [`Interpreter`] tokenizes, parses under a
//! security policy and executes against a capability context, reporting
//! the first failure as an [`Error`]. The `weft` binary is a thin shell
//! over [`commands`].
//!
//! ```text
//! source ─► weft_lexer ─► weft_parse (+ weft_policy) ─► weft_eval (+ context)
//! ```

pub mod commands;
mod config;
mod error;
mod interpreter;
mod tracing_setup;

pub use config::{ConfigError, InterpreterConfig, ENV_MAX_CHAIN, ENV_MAX_DEPTH, ENV_STRICT};
pub use error::Error;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use tracing_setup::init_tracing;

pub use weft_eval::{RenderNode, Value};
