//! Parsed argument values.
//!
//! The result of matching one input line against a compiled syntax. Built
//! fresh per parse call and owned by the caller.

use std::collections::HashMap;

/// The branch of a choice group that matched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptsetMatch {
    /// 0-based index of the branch, in declaration order.
    pub branch: usize,
    /// The input text the branch consumed.
    pub text: String,
}

/// Named values extracted from one line of input.
///
/// Every capture name in the template has an entry. A capture that sat
/// inside an optional segment which did not engage maps to `None` — the
/// absence marker — which is distinct from a capture that matched the empty
/// string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedArgs {
    argstr: String,
    values: HashMap<String, Option<String>>,
    optsets: Vec<Option<OptsetMatch>>,
}

impl ParsedArgs {
    pub(crate) fn new(
        argstr: &str,
        values: HashMap<String, Option<String>>,
        optsets: Vec<Option<OptsetMatch>>,
    ) -> Self {
        Self {
            argstr: argstr.to_string(),
            values,
            optsets,
        }
    }

    /// A result with no captures and no choice groups, as produced by an
    /// empty template.
    #[must_use]
    pub fn empty(argstr: impl Into<String>) -> Self {
        Self {
            argstr: argstr.into(),
            values: HashMap::new(),
            optsets: Vec::new(),
        }
    }

    /// The raw input line that produced this result.
    #[must_use]
    pub fn argstr(&self) -> &str {
        &self.argstr
    }

    /// The value captured under `name`, if the capture was supplied.
    ///
    /// Returns `None` both for absent optional captures and for names the
    /// template never declared; use [`ParsedArgs::is_absent`] to tell them
    /// apart.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name)?.as_deref()
    }

    /// Whether `name` was declared by the template but not supplied.
    #[must_use]
    pub fn is_absent(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(None))
    }

    /// Whether the template declared a capture called `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Number of captures declared by the template.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the template declared no captures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The matched branch of choice group `id` (1-based, as numbered in the
    /// template). `None` when the group sat inside an unengaged optional, or
    /// when no such group exists.
    #[must_use]
    pub fn optset(&self, id: usize) -> Option<&OptsetMatch> {
        self.optsets.get(id.checked_sub(1)?)?.as_ref()
    }

    /// Number of choice groups declared by the template.
    #[must_use]
    pub fn optset_count(&self) -> usize {
        self.optsets.len()
    }
}
