//! Splitter for `prematch[open:nested:close]postmatch` pattern strings.

use super::ast::{AnchorSide, DelimiterSide, PatternParts};

/// The marker separating the start and end delimiters.
pub const NESTED_MARKER: &str = ":nested:";

/// Errors that can occur while parsing or compiling a nested pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern does not contain the `:nested:` marker")]
    MissingNestedMarker,
    #[error("pattern contains the `:nested:` marker {count} times, expected once")]
    AmbiguousNestedMarker { count: usize },
    #[error("no `{expected}` found around the `:nested:` marker")]
    MalformedSyntax { expected: char },
    #[error("{0} delimiter is empty")]
    EmptyDelimiter(DelimiterSide),
    #[error("{side} delimiter {run:?} must be a single character")]
    MultiCharDelimiter { side: DelimiterSide, run: String },
    #[error("start and end delimiters are both {0:?} and cannot nest")]
    IdenticalDelimiters(char),
    #[error("pattern has neither a prematch nor a postmatch anchor")]
    UnsupportedPattern,
    #[error("invalid {anchor} regex")]
    RegexCompileError {
        anchor: AnchorSide,
        #[source]
        source: regex::Error,
    },
}

/// Split an extended pattern into its anchors and delimiters.
///
/// Does not compile the anchors; see [`crate::compile`] for that.
pub fn parse_parts(pattern: &str) -> Result<PatternParts, PatternError> {
    let (left, right) = split_marker(pattern)?;
    let (prematch, start_delim) = split_open(left)?;
    let (end_delim, postmatch) = split_close(right)?;

    if start_delim == end_delim {
        return Err(PatternError::IdenticalDelimiters(start_delim));
    }

    let parts = PatternParts {
        prematch: prematch.to_string(),
        start_delim,
        end_delim,
        postmatch: postmatch.to_string(),
    };
    if parts.mode().is_none() {
        return Err(PatternError::UnsupportedPattern);
    }
    Ok(parts)
}

fn split_marker(pattern: &str) -> Result<(&str, &str), PatternError> {
    match pattern.matches(NESTED_MARKER).count() {
        0 => Err(PatternError::MissingNestedMarker),
        1 => pattern
            .split_once(NESTED_MARKER)
            .ok_or(PatternError::MissingNestedMarker),
        count => Err(PatternError::AmbiguousNestedMarker { count }),
    }
}

/// Split `prematch[open` into the prematch source and the start delimiter.
fn split_open(left: &str) -> Result<(&str, char), PatternError> {
    let bracket = left
        .rfind('[')
        .ok_or(PatternError::MalformedSyntax { expected: '[' })?;
    let run = &left[bracket + 1..];

    // `x[[:nested:]]`: the delimiter is itself the last '['
    if run.is_empty() && left[..bracket].ends_with('[') {
        return Ok((&left[..bracket - 1], '['));
    }

    let delim = single_char(run, DelimiterSide::Start)?;
    Ok((&left[..bracket], delim))
}

/// Split `close]postmatch` into the end delimiter and the postmatch source.
fn split_close(right: &str) -> Result<(char, &str), PatternError> {
    let bracket = right
        .find(']')
        .ok_or(PatternError::MalformedSyntax { expected: ']' })?;
    let run = &right[..bracket];

    if run.is_empty() && right[bracket + 1..].starts_with(']') {
        return Ok((']', &right[bracket + 2..]));
    }

    let delim = single_char(run, DelimiterSide::End)?;
    Ok((delim, &right[bracket + 1..]))
}

fn single_char(run: &str, side: DelimiterSide) -> Result<char, PatternError> {
    let mut chars = run.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(PatternError::EmptyDelimiter(side)),
        (Some(c), None) => Ok(c),
        (Some(_), Some(_)) => Err(PatternError::MultiCharDelimiter {
            side,
            run: run.to_string(),
        }),
    }
}
