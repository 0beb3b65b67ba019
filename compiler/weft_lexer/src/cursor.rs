//! Byte cursor over the source text.
//!
//! Reads past the end return `0x00`, so scanning code can test the next
//! byte without bounds checks of its own. Every method advances by a
//! bounded amount; the scanner is linear in the source length.

/// Cursor over the source bytes.
///
/// The cursor is [`Copy`], so callers can snapshot a position and compare.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte `n` positions ahead.
    #[inline]
    pub(crate) fn peek_at(&self, n: usize) -> u8 {
        self.byte_at(self.pos + n)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// The full character at the current position (for non-ASCII input).
    #[inline]
    pub(crate) fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Advance one byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance over one full character.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.pos = (self.pos + width).min(self.source.len());
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    #[inline]
    pub(crate) fn eat_until_newline(&mut self) {
        self.eat_while(|b| b != b'\n');
    }

    /// Whether the cursor sits at the first byte of a line.
    #[inline]
    pub(crate) fn at_line_start(&self) -> bool {
        self.pos == 0 || self.byte_at(self.pos - 1) == b'\n'
    }

    /// Whether the remaining input starts with `prefix`.
    #[inline]
    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.source
            .get(self.pos..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Source text between `start` and the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or("")
    }

    #[inline]
    pub(crate) fn source_len(&self) -> usize {
        self.source.len()
    }
}

#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_past_end_are_zero() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), b'a');
        assert_eq!(cursor.peek(), b'b');
        assert_eq!(cursor.peek_at(2), 0);
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
        cursor.advance();
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_eat_while_and_slice() {
        let mut cursor = Cursor::new("font_size(");
        cursor.eat_while(is_ident_continue);
        assert_eq!(cursor.slice_from(0), "font_size");
        assert_eq!(cursor.current(), b'(');
    }

    #[test]
    fn test_advance_char_multibyte() {
        let mut cursor = Cursor::new("é!");
        assert_eq!(cursor.current_char(), Some('é'));
        cursor.advance_char();
        assert_eq!(cursor.current(), b'!');
    }

    #[test]
    fn test_line_start() {
        let mut cursor = Cursor::new("a\n=begin");
        assert!(cursor.at_line_start());
        cursor.advance();
        assert!(!cursor.at_line_start());
        cursor.advance();
        assert!(cursor.at_line_start());
        assert!(cursor.starts_with("=begin"));
        assert_eq!(cursor.peek_at(6), 0);
    }
}
