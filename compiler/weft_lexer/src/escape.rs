//! Escape processing for string literal bodies.
//!
//! The scanner locates the closing quote; these functions turn the raw
//! body (between the quotes) into the literal's value.
//!
//! - Double-quoted: `\n` `\t` `\r` `\0` `\\` `\"` `\'` `\u{XXXX}`, and a
//!   backslash before a newline joins the lines. Any other escaped
//!   character stands for itself.
//! - Single-quoted: only `\\` and `\'`; every other backslash is literal.
//!
//! `#{...}` gets no treatment at all: interpolation does not exist.

use crate::lex_error::LexError;
use weft_ir::Span;

#[inline]
fn resolve_simple_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Unescape a double-quoted string body starting at `base_offset`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets are bounded by u32 before scanning starts"
)]
pub(crate) fn unescape_double(content: &str, base_offset: u32) -> Result<String, LexError> {
    if !content.contains('\\') {
        return Ok(content.to_owned());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((_, '\n')) => {}
            Some((_, 'u')) => {
                let start = base_offset + i as u32;
                let decoded = decode_unicode_escape(&mut chars, content.len());
                match decoded {
                    Ok(ch) => result.push(ch),
                    Err(end) => {
                        let end = base_offset + end as u32;
                        return Err(LexError::invalid_unicode_escape(Span::new(start, end)));
                    }
                }
            }
            Some((_, esc)) => result.push(resolve_simple_escape(esc).unwrap_or(esc)),
            None => result.push('\\'),
        }
    }

    Ok(result)
}

/// Decode the `{XXXX}` part of a `\u` escape.
///
/// On failure returns the byte index (within the body) where the escape
/// stopped making sense, for the error span.
fn decode_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    body_len: usize,
) -> Result<char, usize> {
    let Some((open_at, '{')) = chars.peek().copied() else {
        return Err(chars.peek().map_or(body_len, |&(j, _)| j));
    };
    chars.next();

    let mut value: u32 = 0;
    let mut digits = 0;
    let mut end = open_at + 1;
    while let Some(&(j, c)) = chars.peek() {
        end = j + c.len_utf8();
        if c == '}' {
            chars.next();
            if digits == 0 {
                return Err(end);
            }
            return char::from_u32(value).ok_or(end);
        }
        let Some(digit) = c.to_digit(16) else {
            return Err(end);
        };
        digits += 1;
        if digits > 6 {
            return Err(end);
        }
        value = value * 16 + digit;
        chars.next();
    }
    Err(end)
}

/// Unescape a single-quoted string body.
pub(crate) fn unescape_single(content: &str) -> String {
    if !content.contains('\\') {
        return content.to_owned();
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc @ ('\\' | '\'')) => result.push(esc),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}
