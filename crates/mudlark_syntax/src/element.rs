//! Syntax pattern elements.
//!
//! The intermediate representation produced by template parsing. A template
//! like `<class> {named|called|=} <names>` becomes a sequence of elements
//! which is then assembled into a single matching engine.

/// One element of a parsed syntax template.
///
/// A full template is a `Vec<SyntaxElement>` matched in order against the
/// whole input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxElement {
    /// Exact text, matched case-insensitively.
    Literal(String),
    /// One or more spaces. Runs of spaces in the template collapse to a
    /// single element.
    Whitespace,
    /// A named user-value slot.
    Capture {
        /// Name the captured value is stored under.
        name: String,
        /// Explicit pattern written after `:`, if any. `None` means the
        /// default "one or more non-space characters".
        pattern: Option<String>,
    },
    /// Zero-or-one occurrence of the body sequence.
    Optional(Vec<SyntaxElement>),
    /// A required choice between branches, tried in declaration order.
    Choice {
        /// 1-based id assigned in order of `{` appearance across the template.
        optset: usize,
        /// Branch sequences, in the order written.
        branches: Vec<Vec<SyntaxElement>>,
    },
}

impl SyntaxElement {
    /// Whether this element is the whitespace separator.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, SyntaxElement::Whitespace)
    }

    /// Whether this element can match the empty string.
    #[must_use]
    pub fn matches_empty(&self) -> bool {
        match self {
            SyntaxElement::Literal(text) => text.is_empty(),
            SyntaxElement::Whitespace | SyntaxElement::Capture { .. } => false,
            SyntaxElement::Optional(_) => true,
            SyntaxElement::Choice { branches, .. } => branches
                .iter()
                .any(|branch| branch.iter().all(SyntaxElement::matches_empty)),
        }
    }
}
