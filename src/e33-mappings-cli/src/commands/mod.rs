//! Command handlers for the e33-mappings CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod generate;
pub mod list;
