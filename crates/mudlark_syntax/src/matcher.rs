//! Compiled syntax matching.
//!
//! Assembles a parsed element sequence into a single anchored,
//! case-insensitive matching engine and reconciles its raw groups into a
//! [`ParsedArgs`].
//!
//! A compiled syntax is immutable and holds no per-call state, so one
//! instance is shared freely across any number of concurrent parse calls.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::args::{OptsetMatch, ParsedArgs};
use crate::element::SyntaxElement;
use crate::error::SyntaxError;
use crate::parser::SyntaxParser;

/// How one capture maps onto engine groups.
#[derive(Clone, Debug)]
struct CaptureBinding {
    name: String,
    quoted: String,
    unquoted: String,
}

/// How one choice group maps onto engine groups.
#[derive(Clone, Debug)]
struct OptsetBinding {
    group: String,
    branches: Vec<String>,
}

/// A compiled command syntax.
///
/// Compiled once at command registration time, then used to parse every
/// incoming line. The whole input must match; there are no partial matches.
#[derive(Clone, Debug)]
pub struct CompiledSyntax {
    natural: String,
    elements: Vec<SyntaxElement>,
    regex: Regex,
    captures: Vec<CaptureBinding>,
    optsets: Vec<OptsetBinding>,
}

impl CompiledSyntax {
    /// Compiles a syntax template.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] describing the offending construct when the
    /// template is malformed.
    pub fn compile(natural: &str) -> Result<Self, SyntaxError> {
        let parsed = SyntaxParser::parse(natural)?;

        let mut source = String::from("^");
        assemble(&parsed.elements, &mut source);
        source.push('$');

        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|err| SyntaxError::Assembly {
                message: err.to_string(),
            })?;

        let captures = parsed
            .capture_names
            .iter()
            .map(|name| CaptureBinding {
                name: name.clone(),
                quoted: format!("__q_{name}"),
                unquoted: format!("__u_{name}"),
            })
            .collect();

        let mut groups = Vec::new();
        collect_choice_groups(&parsed.elements, &mut groups);
        groups.sort_unstable_by_key(|(optset, _)| *optset);
        let optsets = groups
            .into_iter()
            .map(|(optset, branch_count)| OptsetBinding {
                group: format!("optset{optset}"),
                branches: (0..branch_count)
                    .map(|branch| format!("__optset{optset}_b{branch}"))
                    .collect(),
            })
            .collect();

        Ok(Self {
            natural: natural.to_string(),
            elements: parsed.elements,
            regex,
            captures,
            optsets,
        })
    }

    /// Parses one line of input against this syntax.
    ///
    /// Returns `None` when the input does not satisfy the template. This is
    /// the ordinary outcome for unexpected player input, not an error;
    /// callers try candidate syntaxes in sequence.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<ParsedArgs> {
        let caps = self.regex.captures(input)?;

        let mut values = HashMap::with_capacity(self.captures.len());
        for binding in &self.captures {
            let value = if let Some(m) = caps.name(&binding.quoted) {
                Some(strip_quotes(m.as_str()).to_string())
            } else {
                caps.name(&binding.unquoted)
                    .map(|m| m.as_str().to_string())
            };
            values.insert(binding.name.clone(), value);
        }

        let mut optsets = Vec::with_capacity(self.optsets.len());
        for binding in &self.optsets {
            let selection = caps.name(&binding.group).map(|m| {
                let branch = binding
                    .branches
                    .iter()
                    .position(|group| caps.name(group).is_some())
                    .unwrap_or(0);
                OptsetMatch {
                    branch,
                    text: m.as_str().to_string(),
                }
            });
            optsets.push(selection);
        }

        Some(ParsedArgs::new(input, values, optsets))
    }

    /// The template this syntax was compiled from.
    #[must_use]
    pub fn natural(&self) -> &str {
        &self.natural
    }

    /// The parsed element sequence.
    #[must_use]
    pub fn elements(&self) -> &[SyntaxElement] {
        &self.elements
    }

    /// Capture names in order of appearance in the template.
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.captures.iter().map(|binding| binding.name.as_str())
    }

    /// Number of choice groups in the template.
    #[must_use]
    pub fn optset_count(&self) -> usize {
        self.optsets.len()
    }

    /// Source text of the assembled matching engine.
    #[must_use]
    pub fn regex_source(&self) -> &str {
        self.regex.as_str()
    }
}

/// Renders an element sequence into engine pattern source.
fn assemble(elements: &[SyntaxElement], out: &mut String) {
    for element in elements {
        match element {
            SyntaxElement::Literal(text) => out.push_str(&regex::escape(text)),
            SyntaxElement::Whitespace => out.push_str(" +"),
            SyntaxElement::Capture { name, pattern } => match pattern {
                // The user pattern applies both bare and inside quotes.
                Some(pattern) => out.push_str(&format!(
                    "(?:(?P<__q_{name}>\"{pattern}\")|(?P<__u_{name}>{pattern}))"
                )),
                // Default: a non-space run, or any non-quote run when quoted
                // so the value may contain spaces.
                None => out.push_str(&format!(
                    "(?:(?P<__q_{name}>\"[^\"]+\")|(?P<__u_{name}>[^ ]+))"
                )),
            },
            SyntaxElement::Optional(body) => {
                out.push_str("(?:");
                assemble(body, out);
                out.push_str(")?");
            }
            SyntaxElement::Choice { optset, branches } => {
                out.push_str(&format!("(?P<optset{optset}>"));
                for (index, branch) in branches.iter().enumerate() {
                    if index > 0 {
                        out.push('|');
                    }
                    out.push_str(&format!("(?P<__optset{optset}_b{index}>"));
                    assemble(branch, out);
                    out.push(')');
                }
                out.push(')');
            }
        }
    }
}

/// Collects `(optset id, branch count)` pairs from the element tree.
fn collect_choice_groups(elements: &[SyntaxElement], groups: &mut Vec<(usize, usize)>) {
    for element in elements {
        match element {
            SyntaxElement::Optional(body) => collect_choice_groups(body, groups),
            SyntaxElement::Choice { optset, branches } => {
                groups.push((*optset, branches.len()));
                for branch in branches {
                    collect_choice_groups(branch, groups);
                }
            }
            SyntaxElement::Literal(_)
            | SyntaxElement::Whitespace
            | SyntaxElement::Capture { .. } => {}
        }
    }
}

/// Removes the delimiting quote pair from a quoted capture.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}
