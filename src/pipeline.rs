//! Cover rendering pipeline.
//!
//! prompt → diffusion model → pixel-art filter chain → PNG on disk.
//! Lyric lookup happens before this, in the CLI, because its outcome
//! decides what the user is asked for.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::lyrics::SongQuery;
use crate::output;
use crate::pixel::{self, PixelationSettings};
use crate::prompt::{self, LyricMode, Prompt, PromptInput, StylePreset};
use crate::synth::{ImageSynthesizer, Precision, SynthesisRequest};

/// What to draw
#[derive(Debug, Clone)]
pub struct CoverRequest {
    pub song: SongQuery,
    pub lyrics: Option<String>,
    pub description: String,
    pub style: StylePreset,
}

/// Fixed settings for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
    pub precision: Precision,
    pub lyric_mode: LyricMode,
    pub pixelation: PixelationSettings,
    pub output_dir: PathBuf,
}

impl PipelineSettings {
    /// Settings from configuration plus the chosen precision
    pub fn from_config(config: &Config, precision: Precision) -> Self {
        Self {
            steps: config.diffusion.steps,
            guidance_scale: config.diffusion.guidance_scale,
            width: config.diffusion.width,
            height: config.diffusion.height,
            precision,
            lyric_mode: config.prompt.lyric_mode,
            pixelation: config.pixelation,
            output_dir: config.output.directory.clone(),
        }
    }
}

/// A cover that made it to disk
#[derive(Debug, Clone)]
pub struct RenderedCover {
    pub path: PathBuf,
    pub prompt: Prompt,
}

pub struct CoverPipeline<S> {
    synthesizer: S,
    settings: PipelineSettings,
}

impl<S: ImageSynthesizer> CoverPipeline<S> {
    pub fn new(synthesizer: S, settings: PipelineSettings) -> Self {
        Self {
            synthesizer,
            settings,
        }
    }

    /// Prompt pair for a request
    pub fn prompt(&self, request: &CoverRequest) -> Prompt {
        prompt::build_prompt(&PromptInput {
            title: &request.song.title,
            artist: &request.song.artist,
            lyrics: request.lyrics.as_deref(),
            description: &request.description,
            style: request.style,
            lyric_mode: self.settings.lyric_mode,
        })
    }

    /// Render, pixelate and save a cover
    pub async fn render(&self, request: &CoverRequest) -> Result<RenderedCover> {
        let prompt = self.prompt(request);
        tracing::info!("Generating image with prompt: {}", prompt.text);

        let synthesis = SynthesisRequest {
            prompt: prompt.text.clone(),
            negative_prompt: prompt.negative.clone(),
            steps: self.settings.steps,
            guidance_scale: self.settings.guidance_scale,
            width: self.settings.width,
            height: self.settings.height,
            precision: self.settings.precision,
        };

        let base = self.synthesizer.synthesize(&synthesis).await.map_err(|e| {
            tracing::error!("Error generating image: {}", e);
            e
        })?;
        tracing::debug!("Base image {}x{}", base.width(), base.height());

        let pixelated = pixel::pixelate_image(&base, &self.settings.pixelation);
        let path = output::save_cover(&pixelated, &request.song.title, &self.settings.output_dir)
            .map_err(|e| {
                tracing::error!("Error saving image: {}", e);
                e
            })?;

        Ok(RenderedCover { path, prompt })
    }
}
