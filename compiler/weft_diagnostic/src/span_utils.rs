//! Line/column lookup for spans.

use weft_ir::Span;

/// Byte offsets of every line start, for O(log L) line/column lookup.
///
/// ```
/// use weft_diagnostic::LineOffsetTable;
///
/// let source = "vstack do\n  text(\"A\")\nend";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based `(line, column)`; the column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len()).max(line_start);
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Start position of `span` as `(line, column)`.
    pub fn span_start(&self, source: &str, span: Span) -> (u32, u32) {
        self.offset_to_line_col(source, span.start)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let source = "text(\"hi\")";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.offset_to_line_col(source, 5), (1, 6));
    }

    #[test]
    fn test_offset_at_newline_belongs_to_line() {
        let source = "a\nb\nc";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 1), (1, 2));
        assert_eq!(table.offset_to_line_col(source, 2), (2, 1));
        assert_eq!(table.offset_to_line_col(source, 4), (3, 1));
    }

    #[test]
    fn test_columns_count_chars() {
        let source = "text(\"héllo\") x";
        let table = LineOffsetTable::build(source);
        // 'x' is at byte 15 but character 14
        assert_eq!(table.offset_to_line_col(source, 15), (1, 15));
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let source = "ab";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.span_start(source, Span::point(99)), (1, 3));
    }
}
