//! Command parsing.

mod command;

pub use command::{Command, Verb, parse_command};
