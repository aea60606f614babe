//! In-place text splicing with offset correction.

use crate::base::{TextRange, TextSize};
use crate::error::{ReplacerError, Result};

/// Replace `range` (in pre-splice coordinates) with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSpan {
    pub range: TextRange,
    pub text: String,
}

impl ReplacementSpan {
    pub fn new(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// Length change this span causes once applied
    fn delta(&self) -> i64 {
        self.text.len() as i64 - i64::from(u32::from(self.range.len()))
    }
}

/// The text being rewritten
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Apply `spans`, all expressed against the current contents.
    ///
    /// Spans must be sorted by start, must not overlap and must lie on char
    /// boundaries. They are validated up front, so on error the buffer is
    /// left unchanged.
    pub fn splice(&mut self, spans: &[ReplacementSpan]) -> Result<()> {
        self.validate(spans)?;

        let mut offset: i64 = 0;
        for span in spans {
            let start = shifted(span.range.start(), offset);
            let end = shifted(span.range.end(), offset);
            self.text.replace_range(start..end, &span.text);
            offset += span.delta();
        }
        Ok(())
    }

    fn validate(&self, spans: &[ReplacementSpan]) -> Result<()> {
        let mut previous_end = TextSize::new(0);
        for span in spans {
            let (start, end) = (span.range.start(), span.range.end());
            if start < previous_end {
                return Err(ReplacerError::invalid_input(format!(
                    "replacement spans overlap or are unordered at {:?}",
                    span.range
                )));
            }
            if usize::from(end) > self.text.len()
                || !self.text.is_char_boundary(start.into())
                || !self.text.is_char_boundary(end.into())
            {
                return Err(ReplacerError::invalid_input(format!(
                    "replacement span {:?} is outside the text",
                    span.range
                )));
            }
            previous_end = end;
        }
        Ok(())
    }
}

fn shifted(position: TextSize, offset: i64) -> usize {
    (i64::from(u32::from(position)) + offset) as usize
}
