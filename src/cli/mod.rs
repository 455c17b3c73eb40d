//! Command-line interface for pixel-cover.
//!
//! Runs the interactive cover flow when no subcommand is given, plus
//! commands for looking up lyrics, previewing prompts, pixelating existing
//! images and checking the environment.

mod commands;
pub mod console;

pub use commands::{Cli, Commands, run_command};
