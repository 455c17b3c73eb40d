//! Lyric lookup and prompt preview commands.

use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::lyrics::{LyricsOutcome, SongQuery};
use crate::prompt::{self, PromptInput};

use super::{lyrics_service, resolve_style};

/// Print lyrics for a song, or why there are none
pub fn cmd_lyrics(rt: &Runtime, config: &Config, title: &str, artist: &str) -> anyhow::Result<()> {
    let service = lyrics_service(config)?;
    let query = SongQuery::new(title.trim(), artist.trim());

    println!("Fetching lyrics for '{}' by {}...", query.title, query.artist);
    println!();

    match rt.block_on(service.fetch(&query)) {
        LyricsOutcome::Found(text) => {
            println!("{}", text);
        }
        LyricsOutcome::NotFound => {
            println!("✗ No lyrics found for this song.");
        }
        LyricsOutcome::Unavailable(e) => {
            println!("✗ Couldn't fetch lyrics: {}", e);
        }
    }
    Ok(())
}

/// Print the prompt pair that `generate` would send
pub fn cmd_prompt(
    rt: &Runtime,
    config: &Config,
    title: &str,
    artist: &str,
    description: &str,
    style: Option<&str>,
    lyrics_file: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let query = SongQuery::new(title.trim(), artist.trim());

    let lyrics = match lyrics_file {
        Some(path) => Some(read_lyrics_file(path)?),
        None => {
            let service = lyrics_service(config)?;
            match rt.block_on(service.fetch(&query)) {
                LyricsOutcome::Found(text) => Some(text),
                LyricsOutcome::NotFound => {
                    eprintln!("No lyrics found, building prompt without them.");
                    None
                }
                LyricsOutcome::Unavailable(e) => {
                    eprintln!("Couldn't fetch lyrics ({}), building prompt without them.", e);
                    None
                }
            }
        }
    };

    let style = resolve_style(style.unwrap_or(&config.prompt.style));
    let prompt = prompt::build_prompt(&PromptInput {
        title: &query.title,
        artist: &query.artist,
        lyrics: lyrics.as_deref(),
        description,
        style,
        lyric_mode: config.prompt.lyric_mode,
    });

    println!("Prompt:");
    println!("  {}", prompt.text);
    println!();
    println!("Negative prompt:");
    println!("  {}", prompt.negative);
    Ok(())
}

fn read_lyrics_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(format!("while reading lyrics from {:?}", path))
}
