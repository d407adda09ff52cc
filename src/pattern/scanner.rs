//! Balance-tracking scans over raw text.
//!
//! The scanner only looks at the two delimiter characters; everything else in
//! the text is skipped. Cost is linear in the distance scanned.

/// Outcome of a single balance scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The anchor delimiter was balanced by the delimiter at this offset.
    Closed(usize),
    /// A delimiter facing the wrong way appeared before the anchor opened.
    Malformed,
    /// The scan bound was reached with the anchor still open.
    Exhausted,
}

/// Scans for the delimiter that balances a given opening or closing delimiter.
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    open: char,
    close: char,
}

impl Scanner {
    pub fn new(open: char, close: char) -> Self {
        Self { open, close }
    }

    pub fn close_delim(&self) -> char {
        self.close
    }

    /// Scan forward from the open delimiter at `start` for the close that
    /// balances it.
    ///
    /// Returns [`ScanOutcome::Malformed`] if `start` is not an open delimiter.
    /// `limit` is the offset of a candidate closing delimiter and is included
    /// in the scan; `None` scans to the end of `text`.
    pub fn forward(&self, text: &str, start: usize, limit: Option<usize>) -> ScanOutcome {
        let end = limit.map_or(text.len(), |at| (at + self.close.len_utf8()).min(text.len()));
        let Some(window) = text.get(start..end) else {
            return ScanOutcome::Exhausted;
        };
        if !window.starts_with(self.open) {
            return ScanOutcome::Malformed;
        }

        let mut depth = 0usize;
        for (offset, ch) in window.char_indices() {
            if ch == self.open {
                depth += 1;
            } else if ch == self.close {
                match depth {
                    0 => return ScanOutcome::Malformed,
                    1 => return ScanOutcome::Closed(start + offset),
                    _ => depth -= 1,
                }
            }
        }
        ScanOutcome::Exhausted
    }

    /// Scan backward from the close delimiter at `end` for the open that
    /// balances it.
    ///
    /// Returns [`ScanOutcome::Malformed`] if `end` is not a close delimiter.
    /// `floor` is the offset of the previous candidate closing delimiter and
    /// is excluded; `None` scans to the start of `text`.
    pub fn backward(&self, text: &str, end: usize, floor: Option<usize>) -> ScanOutcome {
        let start = floor.map_or(0, |at| at + self.close.len_utf8());
        let stop = (end + self.close.len_utf8()).min(text.len());
        let Some(window) = text.get(start..stop) else {
            return ScanOutcome::Exhausted;
        };
        if !window.ends_with(self.close) {
            return ScanOutcome::Malformed;
        }

        let mut depth = 0usize;
        for (offset, ch) in window.char_indices().rev() {
            if ch == self.close {
                depth += 1;
            } else if ch == self.open {
                match depth {
                    0 => return ScanOutcome::Malformed,
                    1 => return ScanOutcome::Closed(start + offset),
                    _ => depth -= 1,
                }
            }
        }
        ScanOutcome::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn braces() -> Scanner {
        Scanner::new('{', '}')
    }

    #[test]
    fn test_forward_simple() {
        assert_eq!(braces().forward("{abc}", 0, None), ScanOutcome::Closed(4));
    }

    #[test]
    fn test_forward_nested_absorbs_inner() {
        let text = "foo{a{b}c}bar";
        assert_eq!(braces().forward(text, 3, None), ScanOutcome::Closed(9));
        assert_eq!(braces().forward(text, 5, None), ScanOutcome::Closed(7));
    }

    #[test]
    fn test_forward_start_must_be_open() {
        assert_eq!(braces().forward("ab {x}", 0, None), ScanOutcome::Malformed);
        assert_eq!(braces().forward("ab {x}", 3, None), ScanOutcome::Closed(5));
    }

    #[test]
    fn test_backward_end_must_be_close() {
        assert_eq!(braces().backward("{x}bar", 3, None), ScanOutcome::Malformed);
    }

    #[test]
    fn test_forward_stray_close_is_malformed() {
        assert_eq!(braces().forward("}{x}", 0, None), ScanOutcome::Malformed);
    }

    #[test]
    fn test_forward_unclosed_is_exhausted() {
        assert_eq!(braces().forward("{a{b}", 0, None), ScanOutcome::Exhausted);
    }

    #[test]
    fn test_forward_limit_is_inclusive() {
        let text = "{a{b}c}";
        assert_eq!(braces().forward(text, 0, Some(6)), ScanOutcome::Closed(6));
        assert_eq!(braces().forward(text, 0, Some(4)), ScanOutcome::Exhausted);
    }

    #[test]
    fn test_forward_out_of_range_start() {
        assert_eq!(braces().forward("{}", 10, None), ScanOutcome::Exhausted);
    }

    #[test]
    fn test_forward_multibyte() {
        let scanner = Scanner::new('«', '»');
        let text = "x«a«b»c»";
        assert_eq!(scanner.forward(text, 1, None), ScanOutcome::Closed(10));
    }

    #[test]
    fn test_backward_simple() {
        assert_eq!(braces().backward("{x}bar", 2, None), ScanOutcome::Closed(0));
    }

    #[test]
    fn test_backward_nested() {
        let text = "{{x}y}";
        assert_eq!(braces().backward(text, 5, None), ScanOutcome::Closed(0));
        assert_eq!(braces().backward(text, 3, None), ScanOutcome::Closed(1));
    }

    #[test]
    fn test_backward_floor_is_exclusive() {
        let text = "{x}bar{y}bar";
        assert_eq!(braces().backward(text, 8, Some(2)), ScanOutcome::Closed(6));
    }

    #[test]
    fn test_backward_exhausted_at_floor() {
        let text = "{{x}bar}bar";
        assert_eq!(braces().backward(text, 7, Some(3)), ScanOutcome::Exhausted);
    }

    #[test]
    fn test_backward_stray_open_is_malformed() {
        assert_eq!(braces().backward("{x}{", 3, None), ScanOutcome::Malformed);
    }
}
