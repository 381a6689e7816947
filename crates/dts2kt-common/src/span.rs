//! Byte-offset source spans.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start position (byte offset)
    pub start: u32,
    /// End position (byte offset, exclusive)
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Span {
        Span { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Get the spanned text from source.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        let start = self.start as usize;
        let end = self.end as usize;
        if end <= source.len() && start <= end {
            &source[start..end]
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_text_in_bounds() {
        let span = Span::new(4, 8);
        assert_eq!(span.text("let name = 1"), "name");
    }

    #[test]
    fn test_span_text_out_of_bounds_is_empty() {
        let span = Span::new(10, 40);
        assert_eq!(span.text("short"), "");
        assert_eq!(Span::new(3, 1).text("short"), "");
    }
}
