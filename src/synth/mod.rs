//! Image synthesis through an external diffusion model.
//!
//! The model itself is opaque: we only decide what is sent (prompt pair,
//! step count, guidance scale, size, precision) and decode what comes back.

pub mod accelerator;
mod client;
pub mod dto;

use async_trait::async_trait;
use image::DynamicImage;

pub use accelerator::{Device, Precision};
pub use client::{DEFAULT_DIFFUSION_URL, DiffusionClient};

/// Default sampling steps
pub const DEFAULT_STEPS: u32 = 30;
/// Default classifier-free guidance scale
pub const DEFAULT_GUIDANCE_SCALE: f32 = 8.5;
/// Default output edge length in pixels
pub const DEFAULT_SIZE: u32 = 512;

/// Parameters for one generation
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
    pub precision: Precision,
}

/// Errors from the diffusion backend
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Diffusion backend error: {0}")]
    Backend(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Backend returned no images")]
    NoImage,

    #[error("Failed to decode image: {0}")]
    Decode(String),
}

/// Anything that can turn a prompt into a raster.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<DynamicImage, SynthError>;
}

#[async_trait]
impl ImageSynthesizer for DiffusionClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<DynamicImage, SynthError> {
        self.txt2img(request).await
    }
}
