//! Mudlark - command parsing for interactive text games
//!
//! This crate re-exports the Mudlark layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: mudlark_command — Command definitions, sets, line dispatch
//! Layer 0: mudlark_syntax  — Syntax templates compiled into input matchers
//! ```

pub use mudlark_command as command;
pub use mudlark_syntax as syntax;
