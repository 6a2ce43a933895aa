//! Command implementations for the `bl` command-line tool.

pub mod commands;
