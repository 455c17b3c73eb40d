//! Pixel Cover - pixel-art album covers from song lyrics.
//!
//! Looks up lyrics for a song, turns them into a diffusion prompt, renders
//! the image on a Stable Diffusion backend and runs it through a pixel-art
//! filter chain before saving it as a PNG.

pub mod cli;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod output;
pub mod pipeline;
pub mod pixel;
pub mod prompt;
pub mod synth;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    let default_directive: Directive = "pixel_cover=info".parse()?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(default_directive))
        .init();

    cli::run_command(&args)
}
