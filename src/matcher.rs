//! The compiled, reusable matcher.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::compiler::compile;
use crate::pattern::assemble::{CandidateOffsets, assemble};
use crate::pattern::ast::{AnchorMode, PatternParts};
use crate::pattern::parser::PatternError;
use crate::pattern::scanner::Scanner;
use crate::span::Span;

/// A nested pattern compiled once and reused across many texts.
///
/// Holds no per-text state, so a single matcher can be shared between
/// threads.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pattern: String,
    parts: PatternParts,
    mode: AnchorMode,
    prematch_engine: Regex,
    postmatch_engine: Regex,
}

/// One matched block and the text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    pub span: Span,
    pub text: &'t str,
}

impl CompiledMatcher {
    pub(crate) fn new(
        pattern: String,
        parts: PatternParts,
        mode: AnchorMode,
        prematch_engine: Regex,
        postmatch_engine: Regex,
    ) -> Self {
        Self {
            pattern,
            parts,
            mode,
            prematch_engine,
            postmatch_engine,
        }
    }

    /// The extended pattern this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn start_delim(&self) -> char {
        self.parts.start_delim
    }

    pub fn end_delim(&self) -> char {
        self.parts.end_delim
    }

    pub fn prematch_source(&self) -> &str {
        &self.parts.prematch
    }

    pub fn postmatch_source(&self) -> &str {
        &self.parts.postmatch
    }

    pub fn mode(&self) -> AnchorMode {
        self.mode
    }

    /// Find every anchored, balanced block in `text`, ordered by start.
    ///
    /// Candidates whose delimiters do not balance are skipped, so this never
    /// fails; it returns an empty vector when nothing matches.
    pub fn find_all(&self, text: &str) -> Vec<Span> {
        let candidates = CandidateOffsets::locate(
            self.mode,
            &self.prematch_engine,
            &self.postmatch_engine,
            self.parts.start_delim,
            text,
        );
        let scanner = Scanner::new(self.parts.start_delim, self.parts.end_delim);
        assemble(&scanner, self.mode, text, candidates)
    }

    /// Like [`find_all`](Self::find_all), but returns the matched blocks.
    pub fn find_all_strings<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.find_iter(text).map(|m| m.text).collect()
    }

    /// Iterate over matched blocks with their spans.
    pub fn find_iter<'t>(&self, text: &'t str) -> impl Iterator<Item = Match<'t>> {
        self.find_all(text).into_iter().filter_map(move |span| {
            span.slice(text).map(|block| Match { span, text: block })
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        !self.find_all(text).is_empty()
    }
}

impl fmt::Display for CompiledMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for CompiledMatcher {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}
