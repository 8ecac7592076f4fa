//! Command-line interface module.
//!
//! Provides argument parsing and the interactive console prompts.

pub mod args;
pub mod prompt;
