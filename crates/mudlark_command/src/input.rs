//! Command-line splitting.
//!
//! Separates a raw input line into the command word, an optional switch
//! segment, and the argument string handed to syntax matching:
//!
//! ```text
//! who/sort=name admins
//! └┬┘ └───┬───┘ └──┬─┘
//! cmd  switches  argstr
//! ```

use std::collections::HashMap;

/// A raw input line split into its segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandInput {
    raw: String,
    cmdstr: String,
    switchstr: String,
    argstr: String,
    switches: HashMap<String, Option<String>>,
}

impl CommandInput {
    /// Splits a raw line. Returns `None` for empty (or all-space) input.
    ///
    /// The command word is everything up to the first space; a `/` inside
    /// it starts the switch segment. Switches are `/`-separated `key=value`
    /// pairs; a bare key is a valueless flag. The argument string is the
    /// remainder of the line with the separating spaces removed.
    #[must_use]
    pub fn split(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        if trimmed.is_empty() {
            return None;
        }

        let (word, argstr) = match trimmed.split_once(' ') {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (trimmed, ""),
        };
        let (cmdstr, switchstr) = match word.split_once('/') {
            Some((cmd, switches)) => (cmd, switches),
            None => (word, ""),
        };

        let mut switches = HashMap::new();
        for switch in switchstr.split('/') {
            if switch.is_empty() {
                continue;
            }
            match switch.split_once('=') {
                Some((key, value)) => {
                    switches.insert(key.to_string(), Some(value.to_string()));
                }
                None => {
                    switches.insert(switch.to_string(), None);
                }
            }
        }

        Some(Self {
            raw: raw.to_string(),
            cmdstr: cmdstr.to_string(),
            switchstr: switchstr.to_string(),
            argstr: argstr.to_string(),
            switches,
        })
    }

    /// The unmodified input line.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The command word, without any switch segment.
    #[must_use]
    pub fn cmdstr(&self) -> &str {
        &self.cmdstr
    }

    /// The unparsed switch segment (empty when no `/` was given).
    #[must_use]
    pub fn switchstr(&self) -> &str {
        &self.switchstr
    }

    /// The argument string handed to syntax matching.
    #[must_use]
    pub fn argstr(&self) -> &str {
        &self.argstr
    }

    /// Parsed switches. A `None` value marks a flag given without `=`.
    #[must_use]
    pub fn switches(&self) -> &HashMap<String, Option<String>> {
        &self.switches
    }
}
