//! Styles listing, environment check and config initialization.

use std::path::{Path, PathBuf};

use crate::config::{self, Config, ConfigError};
use crate::error::Result;
use crate::prompt::StylePreset;
use crate::synth::{Precision, accelerator};

/// List style presets with their phrases
pub fn cmd_styles(config: &Config) -> anyhow::Result<()> {
    let default = StylePreset::resolve(&config.prompt.style);

    println!("Available styles:\n");
    for style in StylePreset::ALL {
        let marker = if style == default { "*" } else { " " };
        println!("{} {:<10} {}", marker, style.key(), style.phrase());
    }
    println!();
    println!("* = configured default");
    Ok(())
}

/// Report credentials, endpoints, accelerator and config location
pub fn cmd_check(config: &Config, config_file: Option<&PathBuf>) -> anyhow::Result<()> {
    println!("Credentials:");
    print_presence("SPOTIFY_CLIENT_ID", &config.credentials.spotify_client_id);
    print_presence(
        "SPOTIFY_CLIENT_SECRET",
        &config.credentials.spotify_client_secret,
    );
    if config.client_credentials().is_none() {
        println!("  Lyrics lookup is disabled; you'll be asked for a description instead.");
        println!("  Create an app at: https://developer.spotify.com/dashboard");
    }

    println!();
    println!("Endpoints:");
    println!("  Token:     {}", config.endpoints.token_url);
    println!("  Search:    {}", config.endpoints.search_url);
    println!("  Lyrics:    {}", config.endpoints.lyrics_url);
    println!("  Diffusion: {}", config.diffusion.base_url);

    println!();
    println!("Accelerator:");
    let accelerated = accelerator::has_accelerator(config.diffusion.device);
    let precision = Precision::for_accelerator(accelerated);
    if accelerated {
        println!("✓ GPU available ({:?} device setting)", config.diffusion.device);
    } else {
        println!(
            "✗ No GPU ({:?} device setting); generation will be slow",
            config.diffusion.device
        );
    }
    println!("  Precision: {}", precision.label());

    println!();
    match config_location(config_file) {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not created yet)", path.display()),
        None => println!("Config file: no config directory on this system"),
    }

    Ok(())
}

/// Write the effective configuration to the config file
pub fn cmd_config_init(config: &Config, path: Option<&PathBuf>, force: bool) -> anyhow::Result<()> {
    let target = config_location(path).ok_or(ConfigError::NoConfigDir)?;

    if target.exists() && !force {
        eprintln!(
            "Config file already exists: {} (use --force to overwrite)",
            target.display()
        );
        std::process::exit(1);
    }

    let written = write_config(config, &target)?;
    println!("✓ Wrote config to {}", written.display());
    Ok(())
}

/// The `--config` file when given, otherwise the default location
fn config_location(path: Option<&PathBuf>) -> Option<PathBuf> {
    path.cloned().or_else(config::config_path)
}

fn write_config(config: &Config, path: &Path) -> Result<PathBuf> {
    config::save_to(config, path)?;
    Ok(path.to_path_buf())
}

fn print_presence(name: &str, value: &Option<String>) {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => println!("✓ {}: set", name),
        _ => println!("✗ {}: not set", name),
    }
}
