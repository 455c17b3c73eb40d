//! Cover generation: the interactive flow and the `generate` command.

use clap::Args;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;

use crate::cli::console::Console;
use crate::config::Config;
use crate::lyrics::traits::{LyricsApi, TokenApi, TrackSearchApi};
use crate::lyrics::{LyricsOutcome, LyricsService, SongQuery};
use crate::pipeline::{CoverPipeline, CoverRequest, PipelineSettings, RenderedCover};
use crate::synth::{DiffusionClient, ImageSynthesizer, accelerator};

use super::{lyrics_service, resolve_style};

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Song title (asked for when missing)
    #[arg(short, long)]
    pub title: Option<String>,
    /// Artist name (asked for when missing)
    #[arg(short, long)]
    pub artist: Option<String>,
    /// Mood or theme description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Style preset (see `styles`)
    #[arg(short, long)]
    pub style: Option<String>,
    /// Block size in pixels
    #[arg(short, long)]
    pub pixel_size: Option<u32>,
    /// Don't look up lyrics
    #[arg(long)]
    pub skip_lyrics: bool,
    /// Ask for a description when none was given
    #[arg(skip)]
    pub interactive: bool,
}

/// Generate a cover, printing progress to stdout
pub fn cmd_generate(rt: &Runtime, config: &Config, args: &GenerateArgs) -> anyhow::Result<()> {
    let precision = accelerator::select_precision(config.diffusion.device);
    let mut settings = PipelineSettings::from_config(config, precision);
    if let Some(size) = args.pixel_size {
        settings.pixelation.pixel_size = size;
    }

    let synthesizer =
        DiffusionClient::new(config.diffusion.base_url.clone(), config.diffusion.model.clone())?;
    let pipeline = CoverPipeline::new(synthesizer, settings);
    let lyrics = lyrics_service(config)?;
    let mut console = Console::stdio();

    let result = rt.block_on(run_generate(
        &lyrics,
        &pipeline,
        &mut console,
        args,
        &config.prompt.style,
    ));

    match result {
        Ok(cover) => {
            println!("✓ Album cover generated: {}", cover.path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Failed to generate album cover: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Gather inputs, look up lyrics and render one cover.
///
/// Lyric lookup failures are never fatal; they only change what the user
/// is asked for.
pub async fn run_generate<T, S, L, Y, R, W>(
    lyrics: &LyricsService<T, S, L>,
    pipeline: &CoverPipeline<Y>,
    console: &mut Console<R, W>,
    args: &GenerateArgs,
    default_style: &str,
) -> anyhow::Result<RenderedCover>
where
    T: TokenApi,
    S: TrackSearchApi,
    L: LyricsApi,
    Y: ImageSynthesizer,
    R: BufRead,
    W: Write,
{
    let title = given_or_ask(console, args.title.as_deref(), "Enter song title: ")?;
    let artist = given_or_ask(console, args.artist.as_deref(), "Enter artist name: ")?;
    let song = SongQuery::new(title, artist);

    let outcome = if args.skip_lyrics {
        None
    } else {
        console.say(format!(
            "Fetching lyrics for '{}' by {}...",
            song.title, song.artist
        ))?;
        Some(lyrics.fetch(&song).await)
    };

    let description = match &args.description {
        Some(text) => text.trim().to_string(),
        None if args.interactive => ask_description(console, outcome.as_ref())?,
        None => String::new(),
    };

    let style = resolve_style(args.style.as_deref().unwrap_or(default_style));

    let request = CoverRequest {
        song,
        lyrics: outcome
            .as_ref()
            .and_then(LyricsOutcome::lyrics)
            .map(String::from),
        description,
        style,
    };

    console.say(format!("Generating pixel art album cover ({} style)...", style))?;
    Ok(pipeline.render(&request).await?)
}

fn given_or_ask<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    given: Option<&str>,
    label: &str,
) -> io::Result<String> {
    match given {
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(console.ask(label)?.trim().to_string()),
    }
}

/// Ask for a free-text description; the question depends on the lyric outcome
fn ask_description<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: Option<&LyricsOutcome>,
) -> io::Result<String> {
    match outcome {
        Some(LyricsOutcome::Found(_)) => {
            console.say("Lyrics fetched successfully!")?;
            console.say("Add any extra themes or imagery for the cover (or press Enter to skip):")?;
        }
        Some(LyricsOutcome::NotFound) => {
            console.say("Couldn't find lyrics for this song.")?;
            console.say("Please enter a brief description of the song's mood/theme:")?;
        }
        Some(LyricsOutcome::Unavailable(e)) => {
            console.say(format!("Couldn't fetch lyrics ({}).", e))?;
            console.say("Please enter a brief description of the song's mood/theme:")?;
        }
        None => {
            console.say("Please enter a brief description of the song's mood/theme:")?;
        }
    }
    Ok(console.ask("> ")?.trim().to_string())
}
