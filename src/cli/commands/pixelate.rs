//! Run the pixel-art filter chain over an existing image.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ResultExt;
use crate::output;
use crate::pixel::{self, PixelationSettings};

/// Pixelate `input` and save it to `output`, or to the output directory
pub fn cmd_pixelate(
    config: &Config,
    input: &PathBuf,
    pixel_size: Option<u32>,
    output: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let mut settings = config.pixelation;
    if let Some(size) = pixel_size {
        settings.pixel_size = size;
    }

    match pixelate_file(input, &settings, output, &config.output.directory) {
        Ok(path) => {
            println!("✓ Pixelated image saved: {}", path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

/// Load, pixelate and save; returns where the result went
pub(crate) fn pixelate_file(
    input: &Path,
    settings: &PixelationSettings,
    output: Option<&PathBuf>,
    output_dir: &Path,
) -> crate::error::Result<PathBuf> {
    if !input.exists() {
        return Err(crate::error::Error::not_found(input));
    }

    let image = image::open(input).with_context(format!("while reading {:?}", input))?;
    tracing::info!(
        "Pixelating {:?} ({}x{}, block size {})",
        input,
        image.width(),
        image.height(),
        settings.pixel_size
    );
    let pixelated = pixel::pixelate_image(&image, settings);

    match output {
        Some(path) => {
            output::save_png(&pixelated, path)?;
            Ok(path.clone())
        }
        None => {
            let title = input
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            Ok(output::save_cover(&pixelated, &title, output_dir)?)
        }
    }
}
