//! Command sets.
//!
//! A keyed collection of command definitions. Adding a command whose key is
//! already present replaces the earlier one, so a specialized set layered
//! over a base set hides the base commands it overrides.

use std::collections::HashMap;

use crate::command::Command;

/// A compiled set of commands used for matching input.
#[derive(Clone, Debug, Default)]
pub struct CommandSet {
    // Insertion order is kept so candidate matching is deterministic when
    // two commands share an alias.
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command. A command with the same key is replaced in place.
    pub fn add(&mut self, command: Command) {
        let key = command.key().to_ascii_lowercase();
        if let Some(&slot) = self.index.get(&key) {
            self.commands[slot] = command;
        } else {
            self.index.insert(key, self.commands.len());
            self.commands.push(command);
        }
    }

    /// Adds every command from an iterator.
    pub fn add_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.add(command);
        }
    }

    /// Looks up a command by its key, case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Command> {
        let slot = *self.index.get(&key.to_ascii_lowercase())?;
        self.commands.get(slot)
    }

    /// All commands whose aliases match `word`, in insertion order.
    #[must_use]
    pub fn matching(&self, word: &str) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|command| command.matches(word))
            .collect()
    }

    /// Number of commands in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the set holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over the commands in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}
