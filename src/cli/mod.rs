//! Command-line interface for the `treach` tool.

pub mod commands;
