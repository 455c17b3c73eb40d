//! Enhancement primitives on RGB rasters.
//!
//! Each enhancement blends the image with a "degenerate" version of itself:
//! `out = degenerate + factor * (image - degenerate)`. A factor of 1.0
//! returns the image unchanged; below 1.0 moves toward the degenerate image,
//! above 1.0 moves away from it.

use image::{Rgb, RgbImage};

/// 3x3 smoothing kernel, weights sum to 13
const SMOOTH_KERNEL: [u32; 9] = [1, 1, 1, 1, 5, 1, 1, 1, 1];
const SMOOTH_SCALE: u32 = 13;

/// ITU-R 601 luma, fixed point
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

fn blend_channel(degenerate: u8, value: u8, factor: f32) -> u8 {
    let d = degenerate as f32;
    (d + factor * (value as f32 - d)).round().clamp(0.0, 255.0) as u8
}

fn blend_pixel(degenerate: &Rgb<u8>, pixel: &Rgb<u8>, factor: f32) -> Rgb<u8> {
    Rgb([
        blend_channel(degenerate.0[0], pixel.0[0], factor),
        blend_channel(degenerate.0[1], pixel.0[1], factor),
        blend_channel(degenerate.0[2], pixel.0[2], factor),
    ])
}

/// Contrast: blend against a flat image at the mean luma
pub fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return image.clone();
    }
    let total: u64 = image.pixels().map(|p| luma(p) as u64).sum();
    let mean = ((total as f64 / count as f64) + 0.5) as u8;
    let flat = Rgb([mean, mean, mean]);

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        blend_pixel(&flat, image.get_pixel(x, y), factor)
    })
}

/// Saturation: blend against the grayscale image
pub fn saturation(image: &RgbImage, factor: f32) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        let l = luma(pixel);
        blend_pixel(&Rgb([l, l, l]), pixel, factor)
    })
}

/// Sharpness: blend against the smoothed image
pub fn sharpness(image: &RgbImage, factor: f32) -> RgbImage {
    let smoothed = smooth(image);
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        blend_pixel(smoothed.get_pixel(x, y), image.get_pixel(x, y), factor)
    })
}

/// 3x3 weighted smoothing. Border pixels are copied unchanged.
pub fn smooth(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = image.clone();
    if width < 3 || height < 3 {
        return out;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut sums = [0u32; 3];
            for (i, weight) in SMOOTH_KERNEL.iter().enumerate() {
                let sx = x + (i as u32 % 3) - 1;
                let sy = y + (i as u32 / 3) - 1;
                let pixel = image.get_pixel(sx, sy);
                for (sum, channel) in sums.iter_mut().zip(pixel.0) {
                    *sum += weight * channel as u32;
                }
            }
            let rounded = sums.map(|s| ((s + SMOOTH_SCALE / 2) / SMOOTH_SCALE) as u8);
            out.put_pixel(x, y, Rgb(rounded));
        }
    }
    out
}
