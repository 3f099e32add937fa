//! locomo-cli library root.
//!
//! Exposes the config, prompting and command modules so integration tests
//! can drive the wizard with scripted input instead of a terminal.

pub mod commands;
pub mod config;
pub mod prompt;
