//! Parsed form of an extended nested pattern.

use std::fmt;

/// The pieces of a `prematch[open:nested:close]postmatch` pattern.
///
/// `prematch` and `postmatch` are raw regex source. The delimiters are single
/// characters and are matched literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternParts {
    pub prematch: String,
    pub start_delim: char,
    pub end_delim: char,
    pub postmatch: String,
}

impl PatternParts {
    /// Which anchors are present. `None` when neither is.
    pub fn mode(&self) -> Option<AnchorMode> {
        match (self.prematch.is_empty(), self.postmatch.is_empty()) {
            (false, false) => Some(AnchorMode::Both),
            (false, true) => Some(AnchorMode::PrematchOnly),
            (true, false) => Some(AnchorMode::PostmatchOnly),
            (true, true) => None,
        }
    }
}

/// How spans are assembled, chosen by which anchors a pattern carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    /// Prematch and postmatch both present: forward propagation bounded by
    /// postmatch candidates.
    Both,
    /// Only a prematch: forward propagation to the end of the text.
    PrematchOnly,
    /// Only a postmatch: back propagation.
    PostmatchOnly,
}

/// Which side of the nesting marker a delimiter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSide {
    Start,
    End,
}

impl fmt::Display for DelimiterSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Which anchor regex a compile error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Prematch,
    Postmatch,
}

impl fmt::Display for AnchorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prematch => f.write_str("prematch"),
            Self::Postmatch => f.write_str("postmatch"),
        }
    }
}
