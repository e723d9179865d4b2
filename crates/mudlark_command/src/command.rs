//! Command definitions.
//!
//! A command binds a set of aliases to one or more compiled syntaxes. A
//! command may accept several shapes (`@open <exit> to <room>` and
//! `@open <exit>`, say); they are tried in declaration order and the first
//! one to match wins.

use std::collections::HashMap;

use thiserror::Error;

use mudlark_syntax::{CompiledSyntax, ParsedArgs, SyntaxError};

/// An error raised while building a command definition.
#[derive(Clone, Debug, Error)]
pub enum CommandError {
    /// A command must have at least one alias; the first is its key.
    #[error("command has no aliases")]
    NoAliases,

    /// One of the command's syntax templates failed to compile.
    #[error("cannot parse syntax for '{key}': {source}")]
    Syntax {
        /// Key of the command being built.
        key: String,
        /// The underlying template error.
        #[source]
        source: SyntaxError,
    },
}

/// A command definition.
///
/// Built once at registration time; immutable afterwards.
#[derive(Clone, Debug)]
pub struct Command {
    aliases: Vec<String>,
    syntaxes: Vec<CompiledSyntax>,
    switches: HashMap<String, Option<String>>,
}

impl Command {
    /// Creates a command from its aliases. The first alias is the key.
    ///
    /// # Errors
    /// Returns [`CommandError::NoAliases`] when the alias list is empty.
    pub fn new<I, S>(aliases: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        if aliases.is_empty() {
            return Err(CommandError::NoAliases);
        }
        Ok(Self {
            aliases,
            syntaxes: Vec::new(),
            switches: HashMap::new(),
        })
    }

    /// Adds a syntax template, compiled immediately.
    ///
    /// # Errors
    /// Returns [`CommandError::Syntax`] when the template is malformed.
    pub fn with_syntax(mut self, natural: &str) -> Result<Self, CommandError> {
        let compiled = CompiledSyntax::compile(natural).map_err(|source| CommandError::Syntax {
            key: self.key().to_string(),
            source,
        })?;
        self.syntaxes.push(compiled);
        Ok(self)
    }

    /// Declares a recognized switch, with an optional default value.
    #[must_use]
    pub fn with_switch(mut self, name: &str, default: Option<&str>) -> Self {
        self.switches
            .insert(name.to_string(), default.map(str::to_string));
        self
    }

    /// The command's key: its first alias.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.aliases[0]
    }

    /// All aliases, key first.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether `word` names this command. The portion before any `/` is
    /// compared case-insensitively against the aliases.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let name = word.split('/').next().unwrap_or(word);
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Matches `argstr` against this command's syntaxes in declaration
    /// order. Returns the index of the first syntax that matched along with
    /// its parsed arguments.
    ///
    /// A command with no syntaxes accepts only an empty argument string.
    #[must_use]
    pub fn match_syntax(&self, argstr: &str) -> Option<(usize, ParsedArgs)> {
        if self.syntaxes.is_empty() {
            return argstr.is_empty().then(|| (0, ParsedArgs::empty(argstr)));
        }
        self.syntaxes
            .iter()
            .enumerate()
            .find_map(|(index, syntax)| syntax.parse(argstr).map(|args| (index, args)))
    }

    /// The compiled syntaxes, in declaration order.
    #[must_use]
    pub fn syntaxes(&self) -> &[CompiledSyntax] {
        &self.syntaxes
    }

    /// Declared switches and their defaults.
    #[must_use]
    pub fn switch_defaults(&self) -> &HashMap<String, Option<String>> {
        &self.switches
    }

    /// Whether the command declares a switch called `name`.
    #[must_use]
    pub fn has_switch(&self, name: &str) -> bool {
        self.switches.contains_key(name)
    }

    /// Renders the accepted shapes for display to the author or player,
    /// one template per line.
    #[must_use]
    pub fn syntax_help(&self) -> String {
        self.syntaxes
            .iter()
            .map(|syntax| format!("{} {}", self.key(), syntax.natural()).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
