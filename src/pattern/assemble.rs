//! Span assembly: turns anchor candidates into balanced spans.
//!
//! Forward propagation starts from each prematch candidate and scans toward
//! the postmatch candidates. Back propagation starts from each postmatch
//! candidate and scans toward the text start.
//!
//! Every candidate costs at most one scan over the text, so the worst case is
//! O(candidates × text length). Deeply nested or unbalanced input with many
//! anchor hits is the slow path.

use itertools::Itertools;
use regex::Regex;
use tracing::trace;

use crate::span::Span;
use crate::stack::OffsetStack;

use super::ast::AnchorMode;
use super::scanner::{ScanOutcome, Scanner};

/// Delimiter offsets located by the anchor regexes for one text.
///
/// `starts` holds the offset of the start delimiter in each prematch hit,
/// ascending. `ends` holds the offset of the end delimiter in each postmatch
/// hit, descending.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CandidateOffsets {
    pub starts: Vec<usize>,
    pub ends: Vec<usize>,
}

impl CandidateOffsets {
    /// Run whichever anchor regexes `mode` calls for over `text`.
    ///
    /// `prematch` must end with the start delimiter and `postmatch` must begin
    /// with the end delimiter.
    pub fn locate(
        mode: AnchorMode,
        prematch: &Regex,
        postmatch: &Regex,
        start_delim: char,
        text: &str,
    ) -> Self {
        let starts = match mode {
            AnchorMode::Both | AnchorMode::PrematchOnly => prematch
                .find_iter(text)
                .map(|m| m.end() - start_delim.len_utf8())
                .sorted_unstable()
                .collect(),
            AnchorMode::PostmatchOnly => Vec::new(),
        };
        let ends = match mode {
            AnchorMode::Both | AnchorMode::PostmatchOnly => postmatch
                .find_iter(text)
                .map(|m| m.start())
                .sorted_unstable_by(|a, b| b.cmp(a))
                .collect(),
            AnchorMode::PrematchOnly => Vec::new(),
        };
        Self { starts, ends }
    }
}

/// Assemble spans from `candidates`, ordered by ascending start.
pub fn assemble(
    scanner: &Scanner,
    mode: AnchorMode,
    text: &str,
    candidates: CandidateOffsets,
) -> Vec<Span> {
    trace!(
        ?mode,
        starts = candidates.starts.len(),
        ends = candidates.ends.len(),
        "assembling spans"
    );
    let spans = match mode {
        AnchorMode::Both | AnchorMode::PrematchOnly => forward_propagation(
            scanner,
            text,
            &candidates.starts,
            OffsetStack::from_descending(candidates.ends),
        ),
        AnchorMode::PostmatchOnly => back_propagation(scanner, text, &candidates.ends),
    };
    spans.into_iter().sorted_unstable().collect()
}

/// Match each start candidate to the end candidate its block closes on.
///
/// End candidates at or before a start can never close it and are popped for
/// good, since starts are visited in ascending order. Once no end candidates
/// remain, starts are scanned to the end of the text.
fn forward_propagation(
    scanner: &Scanner,
    text: &str,
    starts: &[usize],
    mut ends: OffsetStack,
) -> Vec<Span> {
    let mut spans = Vec::new();

    for &start in starts {
        while ends.peek().is_some_and(|end| end <= start) {
            ends.pop();
        }

        // Closes past the furthest end candidate cannot match any of them
        let outcome = scanner.forward(text, start, ends.bottom());
        let ScanOutcome::Closed(close) = outcome else {
            trace!(start, ?outcome, "no balanced close");
            continue;
        };

        let accepted = ends.is_empty()
            || ends
                .iter_top_down()
                .take_while(|&end| end <= close)
                .any(|end| end == close);
        if accepted {
            spans.push(Span::from_inclusive(start, close, scanner.close_delim()));
        } else {
            trace!(start, close, "close is not followed by postmatch");
        }
    }
    spans
}

/// Match each end candidate back to the start delimiter that opens it.
///
/// `ends` is descending. Each scan is first bounded by the next smaller end
/// candidate; a block that encloses that candidate is still found by
/// rescanning down to the start of the text. A scan that finds no balancing
/// open yields no span; a start offset is never made up from the bound.
fn back_propagation(scanner: &Scanner, text: &str, ends: &[usize]) -> Vec<Span> {
    let mut spans = Vec::new();

    for (i, &end) in ends.iter().enumerate() {
        let floor = ends.get(i + 1).copied();
        let outcome = match scanner.backward(text, end, floor) {
            ScanOutcome::Exhausted if floor.is_some() => scanner.backward(text, end, None),
            outcome => outcome,
        };
        match outcome {
            ScanOutcome::Closed(open) => {
                spans.push(Span::from_inclusive(open, end, scanner.close_delim()));
            }
            outcome => trace!(end, ?outcome, "no balanced open"),
        }
    }
    spans
}
