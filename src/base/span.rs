//! Byte offsets and their line/column equivalents.

pub use text_size::{TextRange, TextSize};

/// A zero-based line and column.
///
/// Columns count UTF-16 code units, the unit JavaScript tooling reports
/// positions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset at which each line starts; the first entry is always 0
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Build the index. Line terminators are `\n`, `\r\n`, lone `\r`,
    /// U+2028 and U+2029.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut chars = text.char_indices().peekable();
        while let Some((offset, c)) = chars.next() {
            let terminator = match c {
                '\r' if chars.peek().map(|(_, next)| *next) == Some('\n') => false,
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => true,
                _ => false,
            };
            if terminator {
                let next = offset + c.len_utf8();
                line_starts.push(TextSize::new(next as u32));
            }
        }
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line/column of `offset` within `text` (the text the index was built
    /// from). Offsets past the end clamp to the end.
    pub fn line_col(&self, text: &str, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(text));
        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset);
        let col = text
            .get(start..end)
            .map(|s| s.encode_utf16().count())
            .unwrap_or(end - start);
        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }
}
