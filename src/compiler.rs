//! Compiles extended nested patterns into a [`CompiledMatcher`].
//!
//! The anchors are handed to the `regex` crate with the delimiter appended
//! (prematch) or prepended (postmatch), so every anchor hit pins the exact
//! offset of a delimiter.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::matcher::CompiledMatcher;
use crate::pattern::ast::{AnchorSide, PatternParts};
use crate::pattern::parser::{PatternError, parse_parts};

/// Compile an extended pattern with default options.
pub fn compile(pattern: &str) -> Result<CompiledMatcher, PatternError> {
    MatcherBuilder::new(pattern).build()
}

/// Same as [`compile`].
pub fn parse(pattern: &str) -> Result<CompiledMatcher, PatternError> {
    compile(pattern)
}

/// Options for compiling a [`CompiledMatcher`].
///
/// ```rust
/// use nestmatch::MatcherBuilder;
///
/// let matcher = MatcherBuilder::new("FN[(:nested:)]")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert_eq!(matcher.find_all_strings("fn(a, (b))"), vec!["(a, (b))"]);
/// ```
#[derive(Debug, Clone)]
pub struct MatcherBuilder {
    pattern: String,
    case_insensitive: bool,
    multi_line: bool,
    delimiter_gap: bool,
    size_limit: Option<usize>,
}

impl MatcherBuilder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            case_insensitive: false,
            multi_line: false,
            delimiter_gap: true,
            size_limit: None,
        }
    }

    /// Match the anchors case-insensitively.
    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.case_insensitive = yes;
        self
    }

    /// Let `^` and `$` in the anchors match at line boundaries.
    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.multi_line = yes;
        self
    }

    /// Allow whitespace between an anchor and its delimiter (the default).
    ///
    /// With this off, `query getX[{:nested:}]` no longer matches
    /// `query getX { ... }`, only `query getX{ ... }`.
    pub fn delimiter_gap(&mut self, yes: bool) -> &mut Self {
        self.delimiter_gap = yes;
        self
    }

    /// Size limit for each compiled anchor regex, in bytes.
    pub fn size_limit(&mut self, bytes: usize) -> &mut Self {
        self.size_limit = Some(bytes);
        self
    }

    pub fn build(&self) -> Result<CompiledMatcher, PatternError> {
        let parts = parse_parts(&self.pattern)?;
        let mode = parts.mode().ok_or(PatternError::UnsupportedPattern)?;

        let prematch = self.anchor_regex(AnchorSide::Prematch, &parts)?;
        let postmatch = self.anchor_regex(AnchorSide::Postmatch, &parts)?;
        debug!(
            pattern = %self.pattern,
            ?mode,
            prematch = prematch.as_str(),
            postmatch = postmatch.as_str(),
            "compiled nested matcher"
        );

        Ok(CompiledMatcher::new(
            self.pattern.clone(),
            parts,
            mode,
            prematch,
            postmatch,
        ))
    }

    fn anchor_regex(
        &self,
        anchor: AnchorSide,
        parts: &PatternParts,
    ) -> Result<Regex, PatternError> {
        let gap = if self.delimiter_gap { r"\s*" } else { "" };
        let source = match anchor {
            AnchorSide::Prematch => format!(
                "{}{gap}{}",
                group(&parts.prematch),
                literal(parts.start_delim)
            ),
            AnchorSide::Postmatch => format!(
                "{}{gap}{}",
                literal(parts.end_delim),
                group(&parts.postmatch)
            ),
        };

        let mut builder = RegexBuilder::new(&source);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
            .build()
            .map_err(|source| PatternError::RegexCompileError { anchor, source })
    }
}

/// A delimiter as an exact, case-sensitive regex literal.
fn literal(delim: char) -> String {
    format!("(?-i:{})", regex::escape(&delim.to_string()))
}

/// Wrap a non-empty anchor in a non-capturing group so a top-level `|` stays
/// inside it.
fn group(source: &str) -> String {
    if source.is_empty() {
        String::new()
    } else {
        format!("(?:{source})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::ast::AnchorMode;

    fn compile_err(input: &str) -> PatternError {
        match compile(input) {
            Ok(m) => panic!("expected error for {input:?}, got {m:?}"),
            Err(e) => e,
        }
    }

    #[test]
    fn test_compile_exposes_parts() {
        let m = compile("a[{:nested:}]b").unwrap();
        assert_eq!(m.start_delim(), '{');
        assert_eq!(m.end_delim(), '}');
        assert_eq!(m.prematch_source(), "a");
        assert_eq!(m.postmatch_source(), "b");
        assert_eq!(m.mode(), AnchorMode::Both);
    }

    #[test]
    fn test_delimiters_are_escaped() {
        // '(' and '[' would be regex syntax errors unescaped
        assert!(compile("f[(:nested:)]").is_ok());
        assert!(compile("list[[:nested:]]").is_ok());
        assert!(compile("x[{:nested:}]").is_ok());
    }

    #[test]
    fn test_alternation_stays_in_anchor() {
        let m = compile("query|mutation[{:nested:}]").unwrap();
        assert_eq!(m.find_all_strings("query {a} mutation {b}"), vec!["{a}", "{b}"]);
    }

    #[test]
    fn test_invalid_prematch_regex() {
        match compile_err("a(b[{:nested:}]") {
            PatternError::RegexCompileError { anchor, .. } => {
                assert_eq!(anchor, AnchorSide::Prematch)
            }
            e => panic!("expected RegexCompileError, got {e:?}"),
        }
    }

    #[test]
    fn test_invalid_postmatch_regex() {
        assert!(matches!(
            compile_err("[{:nested:}]b)"),
            PatternError::RegexCompileError {
                anchor: AnchorSide::Postmatch,
                ..
            }
        ));
    }

    #[test]
    fn test_no_anchor_is_unsupported() {
        assert!(matches!(
            compile_err("[{:nested:}]"),
            PatternError::UnsupportedPattern
        ));
    }

    #[test]
    fn test_strict_adjacency() {
        let m = MatcherBuilder::new("getX[{:nested:}]")
            .delimiter_gap(false)
            .build()
            .unwrap();
        assert!(m.find_all("getX {a}").is_empty());
        assert_eq!(m.find_all_strings("getX{a}"), vec!["{a}"]);
    }

    #[test]
    fn test_case_insensitive_anchor() {
        let text = "QUERY {a}";
        assert!(compile("query[{:nested:}]").unwrap().find_all(text).is_empty());
        let m = MatcherBuilder::new("query[{:nested:}]")
            .case_insensitive(true)
            .build()
            .unwrap();
        assert_eq!(m.find_all_strings(text), vec!["{a}"]);
    }

    #[test]
    fn test_case_insensitive_keeps_delimiters_exact() {
        let m = MatcherBuilder::new("x[a:nested:b]")
            .case_insensitive(true)
            .build()
            .unwrap();
        assert!(m.find_all("xA a b").is_empty());
        assert_eq!(m.find_all_strings("X a b"), vec!["a b"]);
    }

    #[test]
    fn test_multi_line_anchor() {
        let text = "x\nk{1}\nk{2}";
        assert!(compile("^k[{:nested:}]").unwrap().find_all(text).is_empty());
        let m = MatcherBuilder::new("^k[{:nested:}]")
            .multi_line(true)
            .build()
            .unwrap();
        assert_eq!(m.find_all_strings(text), vec!["{1}", "{2}"]);
    }

    #[test]
    fn test_size_limit_is_applied() {
        assert!(matches!(
            MatcherBuilder::new(r"\w{1000}[{:nested:}]")
                .size_limit(16)
                .build(),
            Err(PatternError::RegexCompileError { .. })
        ));
    }
}
