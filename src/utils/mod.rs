//! Utility functions.

pub mod parser;

pub use parser::{CommandInvocation, parse_command, parse_duration, parse_mute_seconds};
