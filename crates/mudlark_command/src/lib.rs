//! Command definitions, sets, and input dispatch for Mudlark.
//!
//! This crate sits between raw player input and game logic: commands
//! declare their aliases, switches, and accepted syntax shapes (compiled by
//! `mudlark_syntax`), and a [`CommandSet`] routes each incoming line to the
//! first command-and-syntax pair that accepts it.
//!
//! ```
//! use mudlark_command::{Command, CommandSet};
//!
//! let mut set = CommandSet::new();
//! set.add(
//!     Command::new(["@dig"]).unwrap()
//!         .with_syntax("<exitSpec> to <room>").unwrap(),
//! );
//!
//! let m = set.dispatch("@dig north to \"The Great Hall\"").unwrap();
//! assert_eq!(m.args.get("room"), Some("The Great Hall"));
//! ```
//!
//! # Modules
//!
//! - [`command`] - Command definitions: aliases, syntaxes, switches
//! - [`set`] - Keyed command collections with override semantics
//! - [`input`] - Raw line splitting (`cmd/switch=val args`)
//! - [`dispatch`] - Routing a line to the first matching command

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod dispatch;
pub mod input;
pub mod set;

// Re-export main types for convenience
pub use command::{Command, CommandError};
pub use dispatch::{CommandMatch, DispatchError};
pub use input::CommandInput;
pub use set::CommandSet;
