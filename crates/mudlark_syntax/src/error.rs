//! Error types for syntax template compilation.
//!
//! These errors surface authoring bugs in command definitions. A line of
//! player input that simply fails to match is not an error; `parse` returns
//! `None` for that.

use thiserror::Error;

/// An error raised while compiling a syntax template.
///
/// Every variant carries the byte offset of the offending construct within
/// the template string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `[` or `{` was never closed.
    #[error("missing closing '{expected}' at byte {offset}")]
    MissingClosing {
        /// The delimiter that was expected.
        expected: char,
        /// Byte offset where the template ended or the mismatch was found.
        offset: usize,
    },

    /// A `]` or `}` appeared with no matching opener at this nesting level.
    #[error("unexpected closing '{found}' at byte {offset}")]
    UnexpectedClosing {
        /// The delimiter that was found.
        found: char,
        /// Byte offset of the delimiter.
        offset: usize,
    },

    /// A `<` was never closed by `>`.
    #[error("missing closing '>' for capture at byte {offset}")]
    UnterminatedCapture {
        /// Byte offset of the opening `<`.
        offset: usize,
    },

    /// A capture name is empty or not an identifier-like token.
    #[error("invalid capture name '{name}' at byte {offset}")]
    InvalidCaptureName {
        /// The offending name.
        name: String,
        /// Byte offset of the opening `<`.
        offset: usize,
    },

    /// The same capture name appears twice in one template.
    #[error("duplicate capture name '{name}' at byte {offset}")]
    DuplicateCapture {
        /// The repeated name.
        name: String,
        /// Byte offset of the second occurrence.
        offset: usize,
    },

    /// A user-supplied capture pattern is not a valid pattern.
    #[error("invalid pattern '{pattern}' for capture at byte {offset}: {message}")]
    InvalidCapturePattern {
        /// The offending pattern text.
        pattern: String,
        /// Byte offset of the opening `<`.
        offset: usize,
        /// Description from the pattern engine.
        message: String,
    },

    /// The assembled matcher was rejected by the pattern engine.
    ///
    /// Reachable when a user-supplied pattern is valid on its own but
    /// conflicts with the assembled whole (e.g. a named group collision).
    #[error("syntax assembly failed: {message}")]
    Assembly {
        /// Description from the pattern engine.
        message: String,
    },
}
