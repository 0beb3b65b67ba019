//! Checks for values that end up in class names and attributes.
//!
//! Nothing a program passes can close an attribute, open a tag or name a
//! script URL: style tokens are restricted to `[a-z0-9-_:/.]`, free text to
//! characters without markup meaning, URLs to web and relative forms.

use weft_eval::errors::invalid_value;
use weft_eval::{EvalResult, Invocation};

pub const MAX_TOKEN_LEN: usize = 64;
pub const MAX_TEXT_LEN: usize = 256;

/// A CSS utility fragment such as `xl`, `blue-500`, `1/2` or `md:flex`.
pub fn is_style_token(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_TOKEN_LEN
        && value.bytes().all(|b| {
            b.is_ascii_lowercase()
                || b.is_ascii_digit()
                || matches!(b, b'-' | b'_' | b':' | b'/' | b'.')
        })
}

/// Text allowed in attributes like `alt` and `aria-label`.
pub fn is_attribute_text(value: &str) -> bool {
    value.len() <= MAX_TEXT_LEN && !value.chars().any(is_markup_char)
}

/// `http://`, `https://`, root-relative (`/docs`) or fragment (`#top`).
///
/// Protocol-relative `//host` is rejected along with every other scheme.
pub fn is_safe_url(url: &str) -> bool {
    let allowed = url.starts_with("https://")
        || url.starts_with("http://")
        || (url.starts_with('/') && !url.starts_with("//"))
        || url.starts_with('#');
    allowed && !url.chars().any(|c| c.is_whitespace() || c == '\\' || is_markup_char(c))
}

fn is_markup_char(c: char) -> bool {
    c.is_control() || matches!(c, '<' | '>' | '"' | '\'' | '`')
}

pub(crate) fn style_token(inv: &Invocation, arg: &str, value: String) -> EvalResult<String> {
    if is_style_token(&value) {
        Ok(value)
    } else {
        Err(invalid_value(
            &inv.method,
            arg,
            format!("`{value}` is not a valid style token"),
        ))
    }
}

pub(crate) fn attribute_text<'a>(
    inv: &Invocation,
    arg: &str,
    value: &'a str,
) -> EvalResult<&'a str> {
    if is_attribute_text(value) {
        Ok(value)
    } else {
        Err(invalid_value(&inv.method, arg, "text contains markup characters"))
    }
}

pub(crate) fn url<'a>(inv: &Invocation, arg: &str, value: &'a str) -> EvalResult<&'a str> {
    if is_safe_url(value) {
        Ok(value)
    } else {
        Err(invalid_value(
            &inv.method,
            arg,
            "only http(s), root-relative and fragment URLs are allowed",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_token_charset() {
        for ok in ["xl", "blue-500", "1/2", "md:flex", "space_y", "0.5"] {
            assert!(is_style_token(ok), "{ok}");
        }
        let long = "a".repeat(MAX_TOKEN_LEN + 1);
        for bad in ["", "XL", "a b", "x\"y", "<b>", "a;b", "url(x)", long.as_str()] {
            assert!(!is_style_token(bad), "{bad}");
        }
    }

    #[test]
    fn attribute_text_rejects_markup() {
        assert!(is_attribute_text("Close the dialog"));
        assert!(is_attribute_text(""));
        assert!(!is_attribute_text("a\" onclick=\"x"));
        assert!(!is_attribute_text("<img>"));
        assert!(!is_attribute_text("line\nbreak"));
    }

    #[test]
    fn only_web_and_relative_urls() {
        for ok in ["https://example.com/a?b=1", "http://x.io", "/docs/intro", "#top"] {
            assert!(is_safe_url(ok), "{ok}");
        }
        for bad in [
            "javascript:alert(1)",
            "JAVASCRIPT:x",
            "data:text/html,x",
            "//evil.example",
            "ftp://x",
            "relative/path",
            "/a b",
            "/\"onmouseover",
            "",
        ] {
            assert!(!is_safe_url(bad), "{bad}");
        }
    }
}
