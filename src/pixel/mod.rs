//! Pixel-art post-processing.
//!
//! Fixed filter chain applied to the synthesized image:
//! contrast → saturation → smoothing → bicubic downscale by the block size →
//! nearest-neighbour upscale to the original size → sharpness.
//!
//! The output always has the input's dimensions. A block size of 0 acts as 1,
//! and the intermediate image is never smaller than 1×1.

pub mod enhance;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use serde::{Deserialize, Serialize};

/// Filter chain parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelationSettings {
    /// Edge length of one output "pixel" block
    pub pixel_size: u32,
    /// Contrast factor applied first
    pub contrast: f32,
    /// Saturation factor
    pub saturation: f32,
    /// Sharpness factor applied last (below 1.0 softens)
    pub sharpness: f32,
}

impl Default for PixelationSettings {
    fn default() -> Self {
        Self {
            pixel_size: 6,
            contrast: 1.2,
            saturation: 1.3,
            sharpness: 0.8,
        }
    }
}

impl PixelationSettings {
    /// Size of the downscaled intermediate for an image of `width`×`height`
    pub fn reduced_size(&self, width: u32, height: u32) -> (u32, u32) {
        let block = self.pixel_size.max(1);
        ((width / block).max(1), (height / block).max(1))
    }
}

/// Run the filter chain over any image
pub fn pixelate_image(image: &DynamicImage, settings: &PixelationSettings) -> RgbImage {
    pixelate(&image.to_rgb8(), settings)
}

/// Run the filter chain over an RGB raster
pub fn pixelate(image: &RgbImage, settings: &PixelationSettings) -> RgbImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    let boosted = enhance::contrast(image, settings.contrast);
    let boosted = enhance::saturation(&boosted, settings.saturation);
    let smoothed = enhance::smooth(&boosted);

    let (small_w, small_h) = settings.reduced_size(width, height);
    tracing::debug!(
        "Pixelating {}x{} via {}x{} (block {})",
        width,
        height,
        small_w,
        small_h,
        settings.pixel_size
    );
    let small = imageops::resize(&smoothed, small_w, small_h, FilterType::CatmullRom);
    let blocky = imageops::resize(&small, width, height, FilterType::Nearest);

    enhance::sharpness(&blocky, settings.sharpness)
}
