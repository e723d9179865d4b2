//! Command syntax templates compiled into reusable input matchers.
//!
//! Interactive commands describe the shapes they accept with a small
//! English-like template language:
//!
//! ```text
//! look [[at] <something>]
//! <class> {named|called|=} <names>
//! @dig <exitSpec> to <room>
//! ```
//!
//! A template is compiled once, at command registration time, into a
//! [`CompiledSyntax`]; the compiled form is then used to parse every
//! incoming line for the life of the process.
//!
//! # Architecture
//!
//! ```text
//! "go [<direction>]"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ TEMPLATE        │  → [Literal("go"), Optional([Whitespace, Capture("direction")])]
//! │ PARSING         │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ASSEMBLY        │  → one anchored, case-insensitive matching engine
//! └─────────────────┘
//!          │
//!          ▼  (per input line, many times)
//! ┌─────────────────┐
//! │ MATCHING        │  → "go north" → { direction: "north" }
//! └─────────────────┘
//! ```
//!
//! # Template notation
//!
//! - `[ ]` — optional segment. A space adjacent to the brackets is absorbed
//!   into the segment, so the separator is only required when the optional
//!   content is present.
//! - `< >` — named user value: `<name>` or `<name:pattern>`. Values may be
//!   double-quoted to include spaces; the quotes are stripped from the
//!   captured value.
//! - `{ }` — required choice, branches separated by `|` and tried in the
//!   order written. The first branch that matches wins.
//!
//! Everything else is literal text, matched case-insensitively, with any
//! run of spaces standing for one mandatory separator.
//!
//! Malformed templates fail to compile with a [`SyntaxError`]; input that
//! merely fails to match yields `None` from [`CompiledSyntax::parse`], which
//! is the expected, cheap outcome for unrecognized player input.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod element;
pub mod error;
pub mod matcher;
pub mod parser;


// Re-export main types for convenience
pub use args::{OptsetMatch, ParsedArgs};
pub use element::SyntaxElement;
pub use error::SyntaxError;
pub use matcher::CompiledSyntax;
pub use parser::{ParsedSyntax, SyntaxParser};
