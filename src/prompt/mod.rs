//! Prompt construction for the diffusion model.
//!
//! Pure and deterministic: the same inputs always give the same prompt.
//!
//! The prompt is the non-empty parts below joined with `", "`:
//! 1. identity line (`album cover for '{title}' by {artist}`)
//! 2. style phrase
//! 3. quality boilerplate
//! 4. lyric clause (`themes: ...` or `lyrics: ...`)
//! 5. free-text description

mod style;
pub mod text;

use serde::{Deserialize, Serialize};

pub use style::StylePreset;

/// Quality terms appended to every prompt
pub const QUALITY_BOILERPLATE: &str =
    "highly detailed, vibrant colors, crisp pixels, centered composition, album artwork";

/// Attributes the model should avoid, independent of the song
pub const NEGATIVE_PROMPT: &str = "blurry, photorealistic, photograph, 3d render, smooth gradients, \
     text, letters, watermark, signature, frame, low quality, jpeg artifacts, deformed, disfigured";

/// How lyric text is folded into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LyricMode {
    /// Up to 10 keywords from the first 5 lines (`themes: ...`)
    #[default]
    Keywords,
    /// Cleaned first 8 lines, cut to 200 characters (`lyrics: ...`)
    Excerpt,
}

/// Everything the prompt is built from
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub lyrics: Option<&'a str>,
    pub description: &'a str,
    pub style: StylePreset,
    pub lyric_mode: LyricMode,
}

/// A finished prompt pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub negative: String,
}

/// Build the prompt and negative prompt.
pub fn build_prompt(input: &PromptInput<'_>) -> Prompt {
    let identity = format!("album cover for '{}' by {}", input.title, input.artist);
    let lyric_clause = input
        .lyrics
        .map(|lyrics| lyric_clause(lyrics, input.lyric_mode))
        .unwrap_or_default();

    let parts = [
        identity.as_str(),
        input.style.phrase(),
        QUALITY_BOILERPLATE,
        lyric_clause.as_str(),
        input.description.trim(),
    ];

    Prompt {
        text: parts
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", "),
        negative: NEGATIVE_PROMPT.to_string(),
    }
}

fn lyric_clause(lyrics: &str, mode: LyricMode) -> String {
    match mode {
        LyricMode::Keywords => {
            let keywords = text::extract_keywords(lyrics);
            if keywords.is_empty() {
                String::new()
            } else {
                format!("themes: {}", keywords.join(" "))
            }
        }
        LyricMode::Excerpt => {
            let excerpt = text::excerpt(lyrics);
            if excerpt.is_empty() {
                String::new()
            } else {
                format!("lyrics: {}", excerpt)
            }
        }
    }
}
