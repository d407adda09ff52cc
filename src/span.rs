//! Half-open byte ranges identifying matched blocks.

use std::fmt;
use std::ops::Range;

/// A half-open `[start, end)` byte range into the searched text.
///
/// `start` is the offset of the opening delimiter and `end` is one past the
/// last byte of the matching closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    /// Build a span from the offset of an opening delimiter and the offset of
    /// the closing delimiter that balances it.
    ///
    /// The closing delimiter is included, so the exclusive end is
    /// `close + close_delim.len_utf8()`.
    pub fn from_inclusive(start: usize, close: usize, close_delim: char) -> Self {
        Self::new(start, close + close_delim.len_utf8())
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice `text` by this span. Returns `None` if the span is out of bounds
    /// or does not fall on char boundaries.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.range())
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
