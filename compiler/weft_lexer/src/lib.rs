//! Weft lexer.
//!
//! Turns source text into a [`TokenList`] in one pass over the bytes. No
//! regular expressions; each byte is looked at a bounded number of times,
//! so tokenizing is linear in the input length.
//!
//! Unknown characters are not errors: they come out as
//! [`TokenKind::Punctuation`](weft_ir::TokenKind::Punctuation) and the parser
//! and security policy decide what to do with them. The only failures are
//! unterminated strings, unterminated block comments and invalid unicode
//! escapes.

mod cursor;
mod escape;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};

use scanner::Scanner;
use weft_ir::TokenList;

/// Tokenize `source`, dropping comments.
///
/// The result always ends with exactly one `Eof` token.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    Scanner::new(source, false).run()
}

/// Tokenize `source`, keeping `#` and `=begin` comments as tokens.
pub fn tokenize_with_comments(source: &str) -> Result<TokenList, LexError> {
    Scanner::new(source, true).run()
}
