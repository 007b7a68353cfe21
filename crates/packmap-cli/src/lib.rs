//! Library surface of the packmap CLI.
//!
//! Split out of the binary so integration tests can exercise argument
//! parsing and command execution directly.

pub mod cli;
pub mod commands;
pub mod logger;
