//! Template parsing.
//!
//! Converts a syntax template string into a sequence of [`SyntaxElement`]s.
//!
//! Template notation:
//!
//! ```text
//! [ ]  optional segment
//! < >  named user value: <name> or <name:pattern>
//! { }  required choice, branches separated by |
//! ```
//!
//! Space handling is where the subtlety lives. Runs of spaces collapse to a
//! single separator. A space adjacent to an optional segment is absorbed
//! into the segment body, so the separator is only required when the
//! optional content is actually present: `go [<direction>]` must accept both
//! `go` and `go north`. Absorption happens on whichever side has the
//! adjacent space, never both.

use regex::Regex;

use crate::element::SyntaxElement;
use crate::error::SyntaxError;

/// The outcome of parsing one template.
#[derive(Clone, Debug)]
pub struct ParsedSyntax {
    /// Top-level element sequence.
    pub elements: Vec<SyntaxElement>,
    /// Capture names in order of appearance.
    pub capture_names: Vec<String>,
    /// Number of choice groups in the template.
    pub optset_count: usize,
}

/// Recursive-descent parser over a template string.
pub struct SyntaxParser<'src> {
    source: &'src str,
    position: usize,
    optsets: usize,
    captures: Vec<String>,
}

impl<'src> SyntaxParser<'src> {
    /// Parses a template into its element sequence.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] for unbalanced delimiters, unterminated or
    /// misnamed captures, duplicate capture names, or invalid capture
    /// patterns.
    pub fn parse(source: &'src str) -> Result<ParsedSyntax, SyntaxError> {
        let mut parser = Self {
            source,
            position: 0,
            optsets: 0,
            captures: Vec::new(),
        };
        let (elements, _) = parser.parse_sequence(None, false)?;
        Ok(ParsedSyntax {
            elements,
            capture_names: parser.captures,
            optset_count: parser.optsets,
        })
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.advance();
        }
    }

    /// Parses elements until `closer`, end of input, or (inside a choice
    /// body) a branch separator. Returns the sequence and the character
    /// that ended it.
    fn parse_sequence(
        &mut self,
        closer: Option<char>,
        in_choice: bool,
    ) -> Result<(Vec<SyntaxElement>, Option<char>), SyntaxError> {
        let mut elements = Vec::new();
        let ended = loop {
            let Some(ch) = self.peek() else {
                if let Some(expected) = closer {
                    return Err(SyntaxError::MissingClosing {
                        expected,
                        offset: self.position,
                    });
                }
                break None;
            };
            match ch {
                c if closer == Some(c) => {
                    self.advance();
                    break Some(c);
                }
                '|' if in_choice => {
                    self.advance();
                    break Some('|');
                }
                ']' | '}' => {
                    return Err(SyntaxError::UnexpectedClosing {
                        found: ch,
                        offset: self.position,
                    });
                }
                '[' => {
                    self.advance();
                    let (mut body, _) = self.parse_sequence(Some(']'), false)?;
                    if matches!(elements.last(), Some(SyntaxElement::Whitespace)) {
                        // The separator moves inside so `go [<dir>]` still
                        // accepts a bare `go`.
                        elements.pop();
                        body.insert(0, SyntaxElement::Whitespace);
                    } else if self.peek() == Some(' ') {
                        self.skip_spaces();
                        body.push(SyntaxElement::Whitespace);
                    }
                    elements.push(SyntaxElement::Optional(body));
                }
                '{' => {
                    self.advance();
                    self.optsets += 1;
                    let optset = self.optsets;
                    let mut branches = Vec::new();
                    loop {
                        let (branch, end) = self.parse_sequence(Some('}'), true)?;
                        branches.push(branch);
                        if end != Some('|') {
                            break;
                        }
                    }
                    elements.push(SyntaxElement::Choice { optset, branches });
                }
                '<' => {
                    let capture = self.parse_capture()?;
                    elements.push(capture);
                }
                ' ' => {
                    self.skip_spaces();
                    if !elements.is_empty() {
                        elements.push(SyntaxElement::Whitespace);
                    }
                }
                _ => {
                    let text = self.scan_literal(in_choice);
                    elements.push(SyntaxElement::Literal(text));
                }
            }
        };

        // A separator never survives at the end of a level.
        if matches!(elements.last(), Some(SyntaxElement::Whitespace)) {
            elements.pop();
        }

        Ok((elements, ended))
    }

    /// Scans `<name>` or `<name:pattern>` starting at `<`.
    fn parse_capture(&mut self) -> Result<SyntaxElement, SyntaxError> {
        let open = self.position;
        self.advance();
        let rest = &self.source[self.position..];
        let Some(end) = rest.find('>') else {
            return Err(SyntaxError::UnterminatedCapture { offset: open });
        };
        let body = &rest[..end];
        self.position += end + 1;

        let (name, pattern) = match body.split_once(':') {
            Some((name, "")) => (name, None),
            Some((name, pattern)) => (name, Some(pattern)),
            None => (body, None),
        };

        if !is_valid_capture_name(name) {
            return Err(SyntaxError::InvalidCaptureName {
                name: name.to_string(),
                offset: open,
            });
        }
        if self.captures.iter().any(|existing| existing == name) {
            return Err(SyntaxError::DuplicateCapture {
                name: name.to_string(),
                offset: open,
            });
        }
        if let Some(pattern) = pattern {
            // Validate here so the error can point at the capture rather
            // than at the assembled whole.
            Regex::new(&format!("(?:{pattern})")).map_err(|err| {
                SyntaxError::InvalidCapturePattern {
                    pattern: pattern.to_string(),
                    offset: open,
                    message: err.to_string(),
                }
            })?;
        }

        self.captures.push(name.to_string());
        Ok(SyntaxElement::Capture {
            name: name.to_string(),
            pattern: pattern.map(str::to_string),
        })
    }

    /// Accumulates literal text until the next metacharacter.
    fn scan_literal(&mut self, in_choice: bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            let stop =
                matches!(ch, '[' | ']' | '{' | '}' | '<' | ' ') || (in_choice && ch == '|');
            if stop {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

/// Capture names become group names in the matching engine, so they are
/// restricted to identifier-like tokens.
fn is_valid_capture_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
