//! Input dispatch.
//!
//! Routes a raw input line to a command: split the line, collect the
//! commands whose aliases match the command word, and try each candidate's
//! syntaxes until one accepts the argument string.

use std::collections::HashMap;

use thiserror::Error;

use mudlark_syntax::ParsedArgs;

use crate::command::Command;
use crate::input::CommandInput;
use crate::set::CommandSet;

/// A successfully dispatched line.
#[derive(Clone, Debug)]
pub struct CommandMatch<'set> {
    /// The command that accepted the input.
    pub command: &'set Command,
    /// Index of the syntax that matched, in declaration order.
    pub syntax_index: usize,
    /// Parsed argument values.
    pub args: ParsedArgs,
    /// Switch values: declared defaults overlaid with switches given on the
    /// line. A `None` value marks a flag given (or declared) without a value.
    pub switches: HashMap<String, Option<String>>,
}

/// Why a line could not be dispatched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The line was empty or all spaces.
    #[error("empty input")]
    EmptyInput,

    /// No command in the set answers to the command word.
    #[error("unknown command '{word}'")]
    UnknownCommand {
        /// The command word from the input line.
        word: String,
    },

    /// A command matched by name but none of its syntaxes accepted the
    /// argument string.
    #[error("input does not match any syntax for '{key}'\n{help}")]
    NoSyntaxMatch {
        /// Key of the command that matched by name.
        key: String,
        /// Rendered syntax help for that command.
        help: String,
    },

    /// A switch on the line is not declared by the matched command.
    #[error("unknown switch '{switch}' for '{key}'")]
    UnknownSwitch {
        /// Key of the matched command.
        key: String,
        /// The undeclared switch name.
        switch: String,
    },
}

impl CommandSet {
    /// Dispatches a raw input line against this set.
    ///
    /// Candidates are tried in insertion order and each candidate's
    /// syntaxes in declaration order; the first full match wins. When a
    /// command matches by name but not by syntax, the error carries that
    /// command's syntax help so the caller can guide the player.
    ///
    /// # Errors
    /// Returns a [`DispatchError`] describing how far dispatch got.
    pub fn dispatch(&self, raw: &str) -> Result<CommandMatch<'_>, DispatchError> {
        let input = CommandInput::split(raw).ok_or(DispatchError::EmptyInput)?;

        let candidates = self.matching(input.cmdstr());
        if candidates.is_empty() {
            return Err(DispatchError::UnknownCommand {
                word: input.cmdstr().to_string(),
            });
        }

        for &command in &candidates {
            if let Some((syntax_index, args)) = command.match_syntax(input.argstr()) {
                let switches = merge_switches(command, &input)?;
                return Ok(CommandMatch {
                    command,
                    syntax_index,
                    args,
                    switches,
                });
            }
        }

        let first = candidates[0];
        Err(DispatchError::NoSyntaxMatch {
            key: first.key().to_string(),
            help: first.syntax_help(),
        })
    }
}

/// Overlays the line's switches onto the command's declared defaults.
fn merge_switches(
    command: &Command,
    input: &CommandInput,
) -> Result<HashMap<String, Option<String>>, DispatchError> {
    let mut merged = command.switch_defaults().clone();
    for (switch, value) in input.switches() {
        if !command.has_switch(switch) {
            return Err(DispatchError::UnknownSwitch {
                key: command.key().to_string(),
                switch: switch.clone(),
            });
        }
        merged.insert(switch.clone(), value.clone());
    }
    Ok(merged)
}
