//! Regex-anchored matching of nested, balanced delimiter blocks.
//!
//! Regular expressions cannot count nesting. This crate pairs the `regex`
//! crate with a delimiter balance scan: the regex locates anchors, the scan
//! finds where each anchored block closes.
//!
//! # Example
//!
//! ```rust
//! use nestmatch::{Span, compile};
//!
//! let matcher = compile(r"json[{:nested:}]").unwrap();
//! let text = r#"json{"a":1,"b":{"c":2}} json{"d":3}"#;
//!
//! assert_eq!(
//!     matcher.find_all_strings(text),
//!     vec![r#"{"a":1,"b":{"c":2}}"#, r#"{"d":3}"#]
//! );
//! assert_eq!(matcher.find_all(text)[1], Span::new(28, 35));
//! ```

pub mod compiler;
mod matcher;
pub mod pattern;
mod span;
mod stack;

pub use compiler::{MatcherBuilder, compile, parse};
pub use matcher::{CompiledMatcher, Match};
pub use pattern::{AnchorMode, PatternError};
pub use span::Span;
pub use stack::OffsetStack;
