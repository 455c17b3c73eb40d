//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\pixel-cover\config.toml
//! - macOS: ~/Library/Application Support/pixel-cover/config.toml
//! - Linux: ~/.config/pixel-cover/config.toml
//!
//! Command-line flags and environment variables override file values; see
//! [`Overrides`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::lyrics::{ClientCredentials, LyricsConfig, lyrics_api, spotify};
use crate::output::DEFAULT_OUTPUT_DIR;
use crate::pixel::PixelationSettings;
use crate::prompt::LyricMode;
use crate::synth::{self, Device};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// External service endpoints
    pub endpoints: EndpointConfig,

    /// Diffusion model settings
    pub diffusion: DiffusionConfig,

    /// Prompt construction settings
    pub prompt: PromptConfig,

    /// Pixel-art filter chain settings
    pub pixelation: PixelationSettings,

    /// Where covers are written
    pub output: OutputConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Spotify client ID for the client-credentials flow
    pub spotify_client_id: Option<String>,
    /// Spotify client secret
    pub spotify_client_secret: Option<String>,
}

/// Endpoints for the lyric lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub token_url: String,
    pub search_url: String,
    /// Self-hosted lyrics service
    pub lyrics_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            token_url: spotify::DEFAULT_TOKEN_URL.to_string(),
            search_url: spotify::DEFAULT_SEARCH_URL.to_string(),
            lyrics_url: lyrics_api::DEFAULT_LYRICS_URL.to_string(),
        }
    }
}

/// Diffusion backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffusionConfig {
    /// Base URL of the Automatic1111-compatible backend
    pub base_url: String,
    /// Checkpoint title as listed by the backend (empty = whatever is loaded)
    pub model: String,
    pub steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
    /// "auto", "cuda" or "cpu"
    pub device: Device,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            base_url: synth::DEFAULT_DIFFUSION_URL.to_string(),
            model: String::new(),
            steps: synth::DEFAULT_STEPS,
            guidance_scale: synth::DEFAULT_GUIDANCE_SCALE,
            width: synth::DEFAULT_SIZE,
            height: synth::DEFAULT_SIZE,
            device: Device::Auto,
        }
    }
}

/// Prompt settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Default style preset key
    pub style: String,
    /// "keywords" or "excerpt"
    pub lyric_mode: LyricMode,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            style: "fantasy".to_string(),
            lyric_mode: LyricMode::Keywords,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Values from flags / environment that win over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub lyrics_url: Option<String>,
    pub diffusion_url: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Apply command-line / environment overrides
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(id) = &overrides.client_id {
            self.credentials.spotify_client_id = Some(id.clone());
        }
        if let Some(secret) = &overrides.client_secret {
            self.credentials.spotify_client_secret = Some(secret.clone());
        }
        if let Some(url) = &overrides.lyrics_url {
            self.endpoints.lyrics_url = url.clone();
        }
        if let Some(url) = &overrides.diffusion_url {
            self.diffusion.base_url = url.clone();
        }
        if let Some(dir) = &overrides.output_dir {
            self.output.directory = dir.clone();
        }
    }

    /// Client credentials, if both halves are configured
    pub fn client_credentials(&self) -> Option<ClientCredentials> {
        ClientCredentials::from_parts(
            self.credentials.spotify_client_id.as_deref(),
            self.credentials.spotify_client_secret.as_deref(),
        )
    }

    /// Settings for the lyrics service
    pub fn lyrics_config(&self) -> LyricsConfig {
        LyricsConfig {
            credentials: self.client_credentials(),
            token_url: self.endpoints.token_url.clone(),
            search_url: self.endpoints.search_url.clone(),
            lyrics_url: self.endpoints.lyrics_url.clone(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pixel-cover"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
