//! Writing finished covers to disk.
//!
//! Files are named `{sanitized_title}_{unix_timestamp}_cover.png` inside the
//! output directory, which is created on demand. Two saves of the same title
//! within one second overwrite each other.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Used when nothing is left of the title after sanitizing
const UNTITLED: &str = "untitled";

/// Characters that are not allowed in file names on common filesystems
const UNSAFE_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Errors that can occur while saving
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to create output directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to write image to {0}: {1}")]
    Write(PathBuf, image::ImageError),
}

/// Remove filesystem-unsafe characters from a title
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// File name for a cover saved at `timestamp`
pub fn cover_file_name(title: &str, timestamp: i64) -> String {
    format!("{}_{}_cover.png", sanitize_title(title), timestamp)
}

/// Save a cover under `dir`, stamped with the current time
pub fn save_cover(image: &RgbImage, title: &str, dir: &Path) -> Result<PathBuf, OutputError> {
    save_cover_at(image, title, dir, chrono::Utc::now().timestamp())
}

/// Save a cover under `dir` with an explicit timestamp
pub fn save_cover_at(
    image: &RgbImage,
    title: &str,
    dir: &Path,
    timestamp: i64,
) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir).map_err(|e| OutputError::CreateDir(dir.to_path_buf(), e))?;

    let path = dir.join(cover_file_name(title, timestamp));
    save_png(image, &path)?;
    Ok(path)
}

/// Save as PNG at an exact path (parent directories are created)
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OutputError::CreateDir(parent.to_path_buf(), e))?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| OutputError::Write(path.to_path_buf(), e))?;

    tracing::info!("Saved cover to {:?}", path);
    Ok(())
}
