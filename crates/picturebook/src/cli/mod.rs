//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the picturebook binary.

mod commands;
mod illustrate;
mod show;
mod write;

pub use commands::{Cli, Commands};
pub use illustrate::illustrate_storyboard;
pub use show::show_storyboard;
pub use write::write_story;
