//! Nested pattern engine.
//!
//! An extended pattern wraps a regex engine with balanced-delimiter matching:
//!
//! ```text
//! <prematch>[<open>:nested:<close>]<postmatch>
//! ```
//!
//! | Part          | Meaning                                              |
//! |---------------|------------------------------------------------------|
//! | `<prematch>`  | Regex that must match right before the open delim    |
//! | `<open>`      | Single opening delimiter character, e.g. `{`         |
//! | `:nested:`    | Marker; must appear exactly once                     |
//! | `<close>`     | Single closing delimiter character, e.g. `}`         |
//! | `<postmatch>` | Regex that must match right after the close delim    |
//!
//! At least one of prematch and postmatch must be non-empty. Both delimiters
//! are matched literally; `[` and `]` work too (`list[[:nested:]]`).

pub mod assemble;
pub mod ast;
pub mod parser;
pub mod scanner;

pub use assemble::CandidateOffsets;
pub use ast::{AnchorMode, AnchorSide, DelimiterSide, PatternParts};
pub use parser::{NESTED_MARKER, PatternError, parse_parts};
pub use scanner::{ScanOutcome, Scanner};
